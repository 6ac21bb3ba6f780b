//! Customer route components.

use dioxus::prelude::*;

use ui::views::customer as pages;

use crate::Route;

#[component]
pub fn MyDeclarations() -> Element {
    let nav = use_navigator();
    rsx! {
        pages::MyDeclarationsView {
            on_open: move |declaration_id| {
                nav.push(Route::MyDeclarationDetail { declaration_id });
            },
        }
    }
}

#[component]
pub fn MyDeclarationDetail(declaration_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        pages::MyDeclarationView {
            declaration_id,
            on_back: move |_| {
                nav.push(Route::MyDeclarations {});
            },
        }
    }
}
