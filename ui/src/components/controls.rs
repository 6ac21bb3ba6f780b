//! Buttons and form controls.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Destructive => "btn btn-destructive",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = r#type;
    let variant_class = variant.class();
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{button_type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Labelled input with an inline error slot.
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    let invalid = error.is_some();
    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: if invalid { "input input-invalid" } else { "input" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

/// Search input for list pages.
#[component]
pub fn SearchBox(
    placeholder: String,
    value: String,
    #[props(default)] searching: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            input {
                class: "input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if searching {
                span { class: "search-hint", "Searching…" }
            }
        }
    }
}
