//! UI Components
//!
//! Reusable Leptos components.

mod content_form;
mod content_grid;
mod delete_confirm_button;
mod status_banner;

pub use content_form::ContentForm;
pub use content_grid::ContentGrid;
pub use delete_confirm_button::DeleteConfirmButton;
pub use status_banner::StatusBanner;
