//! Content Admin App
//!
//! Single-page console for the content list a separate backend serves
//! to the mobile app.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ContentForm, ContentGrid, StatusBanner};
use crate::context::AppContext;
use crate::listing;
use crate::models::{ContentItem, ServerStatus};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<ContentItem>::new());
    let (loading, set_loading) = signal(false);
    let (server_status, set_server_status) = signal(ServerStatus::Checking);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new(
        (server_status, set_server_status),
        (error, set_error),
        (reload_trigger, set_reload_trigger),
    );
    // Provide context to all children
    provide_context(ctx);

    // Probe backend reachability on mount and on manual refresh
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        ctx.set_status(ServerStatus::Checking);
        spawn_local(async move {
            match api::check_health().await {
                Ok(()) => ctx.set_status(ServerStatus::Connected),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Health probe failed: {err}").into());
                    ctx.set_status(ServerStatus::Disconnected);
                }
            }
        });
    });

    // Load the content list when the trigger changes. A failed fetch
    // leaves the previously displayed list untouched.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_content().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    set_items.set(loaded);
                    ctx.clear_error();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {err}").into());
                    ctx.show_error(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    // Optimistic local-list updates; no re-fetch on create or delete
    let on_created = Callback::new(move |item: ContentItem| {
        set_items.update(|list| listing::prepend(list, item));
    });
    let on_deleted = Callback::new(move |id: u32| {
        set_items.update(|list| listing::remove_by_id(list, id));
    });

    view! {
        <div class="admin-app">
            <header class="admin-header">
                <h1>"Content Admin"</h1>
                <StatusBanner status=server_status />
                <button class="refresh-btn" on:click=move |_| ctx.reload()>
                    "Refresh"
                </button>
            </header>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <ContentForm on_created=on_created />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <ContentGrid items=items on_deleted=on_deleted />

            <p class="item-count">{move || format!("{} items", items.get().len())}</p>
        </div>
    }
}
