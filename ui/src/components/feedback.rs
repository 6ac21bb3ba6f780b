//! Loading, empty, error and not-found states.

use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", span { class: "spinner" } }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", p { "{message}" } }
    }
}

#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "error-notice", "{message}" }
    }
}

/// Explicit state for a detail fetch that came back 404.
#[component]
pub fn NotFoundNotice(message: String) -> Element {
    rsx! {
        div {
            class: "not-found",
            h2 { "Not found" }
            p { "{message}" }
        }
    }
}
