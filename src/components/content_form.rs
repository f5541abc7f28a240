//! Content Form Component
//!
//! Form for publishing new content items with an image upload.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{ContentItem, FormDraft};

/// Create-form for new content items.
///
/// Validates the draft locally before anything is sent; the submit
/// button is disabled while the create request is in flight. On
/// success the fields and the file picker are cleared and the returned
/// record goes to `on_created`.
#[component]
pub fn ContentForm(#[prop(into)] on_created: Callback<ContentItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image_name, set_image_name) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_image_name.set(name);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = FormDraft {
            title: title.get(),
            description: description.get(),
            image_name: image_name.get(),
        };
        if let Err(message) = draft.validate() {
            ctx.show_error(message);
            return;
        }
        // The draft said an image was picked; read it off the input
        let Some(file) = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            ctx.show_error("Please choose an image to upload");
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_content(&draft.title, &draft.description, &file).await {
                Ok(item) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_image_name.set(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    ctx.clear_error();
                    on_created.run(item);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] Create failed: {err}").into());
                    ctx.show_error(err.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="content-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <label class="file-label">
                <input
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <span class="file-name">
                    {move || image_name.get().unwrap_or_else(|| "No image selected".to_string())}
                </span>
            </label>
            <button type="submit" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Publishing..." } else { "Publish" }}
            </button>
        </form>
    }
}
