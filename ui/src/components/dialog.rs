//! Modal overlay and the delete-confirmation dialog.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Confirmation gate in front of destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default)] destructive: bool,
    #[props(default)] busy: bool,
    #[props(default)] error: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let variant = if destructive {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Primary
    };
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            h2 { class: "modal-title", "{title}" }
            p { class: "modal-text", "{message}" }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
            div {
                class: "modal-actions",
                Button {
                    variant,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Working…" } else { "{confirm_label}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
