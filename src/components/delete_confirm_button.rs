//! Delete Confirm Button Component
//!
//! Inline two-step delete confirmation.

use leptos::prelude::*;

/// Delete button that asks before firing `on_confirm`.
///
/// Shows an × button initially. Clicking it swaps in "Delete?" with
/// confirm/cancel buttons, so a stray click never removes anything.
/// The control disarms again after either choice; if the delete
/// request then fails and the row stays, it is back in its idle state.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
