//! Status Banner Component
//!
//! Backend reachability indicator with troubleshooting hints.

use leptos::prelude::*;

use crate::api::API_BASE;
use crate::models::ServerStatus;

/// Three-valued status pill fed by the most recent health probe.
/// When the backend is unreachable, a hint panel explains what to check.
#[component]
pub fn StatusBanner(status: ReadSignal<ServerStatus>) -> impl IntoView {
    view! {
        <div class="status-banner">
            <span class=move || format!("status-pill {}", status.get().css_class())>
                {move || status.get().label()}
            </span>
            <Show when=move || status.get() == ServerStatus::Disconnected>
                <div class="connection-help">
                    <p>{format!("Cannot reach the backend at {API_BASE}.")}</p>
                    <ul>
                        <li>"Make sure the backend server is running"</li>
                        <li>"Check that nothing else is using its port"</li>
                        <li>"Press Refresh once the server is up"</li>
                    </ul>
                </div>
            </Show>
        </div>
    }
}
