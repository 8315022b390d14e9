//! Inline error message

use dioxus::prelude::*;

/// Single-slot inline error. Renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "error-banner", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
