use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "card {class}",
            if !title.is_empty() {
                header { class: "card-header", h2 { class: "card-title", "{title}" } }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Dashboard stat tile.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default = "".to_string())] hint: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
            if !hint.is_empty() {
                p { class: "stat-hint", "{hint}" }
            }
        }
    }
}
