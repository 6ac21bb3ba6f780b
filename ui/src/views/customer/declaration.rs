//! Read-only declaration view for the customer role. Reuses the admin
//! detail page with mutations switched off; the owner id comes from the
//! session rather than the URL.

use dioxus::prelude::*;

use crate::components::Loader;
use crate::use_session;
use crate::views::admin::DeclarationDetailView;

#[component]
pub fn MyDeclarationView(declaration_id: String, on_back: EventHandler<()>) -> Element {
    let session = use_session();

    let Some(user) = session().user else {
        return rsx! { Loader {} };
    };

    rsx! {
        DeclarationDetailView {
            customer_id: user.id,
            declaration_id,
            read_only: true,
            on_back,
        }
    }
}
