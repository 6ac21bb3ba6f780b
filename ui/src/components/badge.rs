use api::{DeclarationStatus, ItemSource};
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: DeclarationStatus) -> Element {
    let class = match status {
        DeclarationStatus::Pending => "badge badge-pending",
        DeclarationStatus::Completed => "badge badge-completed",
    };
    rsx! {
        span { class: "{class}", "{status.label()}" }
    }
}

#[component]
pub fn SourceBadge(source: ItemSource) -> Element {
    let class = match source {
        ItemSource::Manual => "badge badge-manual",
        ItemSource::Exogeno => "badge badge-exogeno",
    };
    rsx! {
        span { class: "{class}", "{source.label()}" }
    }
}
