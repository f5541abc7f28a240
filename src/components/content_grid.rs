//! Content Grid Component
//!
//! Read-only grid of published content with per-item delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::ContentItem;

#[component]
pub fn ContentGrid(
    items: ReadSignal<Vec<ContentItem>>,
    #[prop(into)] on_deleted: Callback<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let delete_item = move |id: u32| {
        spawn_local(async move {
            match api::delete_content(id).await {
                Ok(()) => on_deleted.run(id),
                Err(err) => {
                    web_sys::console::error_1(&format!("[GRID] Delete {id} failed: {err}").into());
                    ctx.show_error(err.to_string());
                }
            }
        });
    };

    view! {
        <div class="content-grid">
            <Show when=move || items.get().is_empty()>
                <p class="empty-hint">"No content yet. Publish something above."</p>
            </Show>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let created = item
                        .created_at
                        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string());
                    view! {
                        <div class="content-card">
                            {item.image_url.clone().map(|src| view! {
                                <img class="card-image" src=src alt=item.title.clone() />
                            })}
                            <div class="card-body">
                                <h3>{item.title.clone()}</h3>
                                <p>{item.description.clone()}</p>
                                {created.map(|ts| view! { <span class="card-date">{ts}</span> })}
                            </div>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=Callback::new(move |_| delete_item(id))
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}
