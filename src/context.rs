//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::ServerStatus;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest health probe verdict - read
    pub server_status: ReadSignal<ServerStatus>,
    set_server_status: WriteSignal<ServerStatus>,
    /// Transient message shown in the error banner - read
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    /// Trigger to refetch content from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        server_status: (ReadSignal<ServerStatus>, WriteSignal<ServerStatus>),
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            server_status: server_status.0,
            set_server_status: server_status.1,
            error: error.0,
            set_error: error.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Record the latest health probe result
    pub fn set_status(&self, status: ServerStatus) {
        self.set_server_status.set(status);
    }

    /// Show a transient error message
    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error.set(Some(message.into()));
    }

    /// Clear the error banner
    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    /// Trigger a refetch of the content list and a fresh health probe
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
