use dioxus::prelude::*;

use ui::SessionProvider;

mod views;
use views::{
    AdminCustomerDetail, AdminCustomers, AdminDashboard, AdminDeclarationDetail,
    AdminDeclarations, AdminEditCustomer, AdminNewCustomer, AdminNewDeclaration, AdminShell,
    CustomerShell, Login, MyDeclarationDetail, MyDeclarations, NotFound, Root,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},

    #[layout(AdminShell)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/customers")]
        AdminCustomers {},
        #[route("/admin/customers/new")]
        AdminNewCustomer {},
        #[route("/admin/customers/:customer_id")]
        AdminCustomerDetail { customer_id: String },
        #[route("/admin/customers/:customer_id/edit")]
        AdminEditCustomer { customer_id: String },
        #[route("/admin/customers/:customer_id/declarations/new")]
        AdminNewDeclaration { customer_id: String },
        #[route("/admin/customers/:customer_id/declarations/:declaration_id")]
        AdminDeclarationDetail { customer_id: String, declaration_id: String },
        #[route("/admin/declarations")]
        AdminDeclarations {},
    #[end_layout]

    #[layout(CustomerShell)]
        #[route("/my")]
        MyDeclarations {},
        #[route("/my/declarations/:declaration_id")]
        MyDeclarationDetail { declaration_id: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProvider {
            Router::<Route> {}
        }
    }
}
