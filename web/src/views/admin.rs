//! Admin route components.

use dioxus::prelude::*;

use ui::views::admin as pages;

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        pages::DashboardView {
            on_open_declaration: move |(customer_id, declaration_id)| {
                nav.push(Route::AdminDeclarationDetail {
                    customer_id,
                    declaration_id,
                });
            },
        }
    }
}

#[component]
pub fn AdminCustomers() -> Element {
    let nav = use_navigator();
    rsx! {
        pages::CustomersView {
            on_open: move |customer_id| {
                nav.push(Route::AdminCustomerDetail { customer_id });
            },
            on_edit: move |customer_id| {
                nav.push(Route::AdminEditCustomer { customer_id });
            },
            on_new: move |_| {
                nav.push(Route::AdminNewCustomer {});
            },
        }
    }
}

#[component]
pub fn AdminNewCustomer() -> Element {
    let nav = use_navigator();
    rsx! {
        pages::NewCustomerView {
            on_saved: move |customer_id| {
                nav.replace(Route::AdminCustomerDetail { customer_id });
            },
            on_cancel: move |_| {
                nav.push(Route::AdminCustomers {});
            },
        }
    }
}

#[component]
pub fn AdminEditCustomer(customer_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        pages::EditCustomerView {
            customer_id,
            on_saved: move |customer_id| {
                nav.replace(Route::AdminCustomerDetail { customer_id });
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}

#[component]
pub fn AdminCustomerDetail(customer_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        pages::CustomerDetailView {
            customer_id,
            on_back: move |_| {
                nav.push(Route::AdminCustomers {});
            },
            on_edit: move |customer_id| {
                nav.push(Route::AdminEditCustomer { customer_id });
            },
            on_new_declaration: move |customer_id| {
                nav.push(Route::AdminNewDeclaration { customer_id });
            },
            on_open_declaration: move |(customer_id, declaration_id)| {
                nav.push(Route::AdminDeclarationDetail {
                    customer_id,
                    declaration_id,
                });
            },
        }
    }
}

#[component]
pub fn AdminNewDeclaration(customer_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        pages::NewDeclarationView {
            customer_id,
            on_created: move |(customer_id, declaration_id)| {
                nav.replace(Route::AdminDeclarationDetail {
                    customer_id,
                    declaration_id,
                });
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}

#[component]
pub fn AdminDeclarationDetail(customer_id: String, declaration_id: String) -> Element {
    let nav = use_navigator();
    let back_id = customer_id.clone();
    rsx! {
        pages::DeclarationDetailView {
            customer_id,
            declaration_id,
            read_only: false,
            on_back: move |_| {
                nav.push(Route::AdminCustomerDetail {
                    customer_id: back_id.clone(),
                });
            },
        }
    }
}

#[component]
pub fn AdminDeclarations() -> Element {
    let nav = use_navigator();
    rsx! {
        pages::DeclarationsView {
            on_open: move |(customer_id, declaration_id)| {
                nav.push(Route::AdminDeclarationDetail {
                    customer_id,
                    declaration_id,
                });
            },
        }
    }
}
