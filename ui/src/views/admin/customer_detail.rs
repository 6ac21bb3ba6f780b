//! Customer detail: profile card plus the customer's declarations.
//!
//! The customer record and the first declarations page load together;
//! either failure aborts the combined view.

use api::services::declarations::DeclarationsService;
use api::services::users::UsersService;
use api::{Declaration, ListPager, User};
use dioxus::prelude::*;
use futures::try_join;

use crate::components::{
    Button, ButtonVariant, Card, ConfirmDialog, EmptyState, ErrorNotice, Loader, NotFoundNotice,
    Pagination, StatusBadge,
};
use crate::{format_date_opt, make_client};

const PAGE_SIZE: usize = 5;

async fn load_declarations_page(
    mut pager: Signal<ListPager<Declaration>>,
    customer_id: String,
    page: usize,
) {
    let (epoch, window) = {
        let mut p = pager.write();
        let epoch = p.begin_load(page);
        (epoch, p.query())
    };
    let client = make_client();
    let result = DeclarationsService::new(&client)
        .find_all_paginated(Some(window), Some(&customer_id))
        .await;
    match result {
        Ok(fetched) => {
            pager.write().commit_page(epoch, fetched.data, fetched.total);
        }
        Err(err) => {
            tracing::error!(error = %err, "declarations page load failed");
            pager.write().fail_load(epoch);
        }
    }
}

#[component]
pub fn CustomerDetailView(
    customer_id: String,
    on_back: EventHandler<()>,
    on_edit: EventHandler<String>,
    on_new_declaration: EventHandler<String>,
    on_open_declaration: EventHandler<(String, String)>,
) -> Element {
    let mut id_signal = use_signal(|| customer_id.clone());
    if *id_signal.peek() != customer_id {
        id_signal.set(customer_id.clone());
    }

    let mut customer = use_signal(|| Option::<User>::None);
    let mut not_found = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut pager = use_signal(|| ListPager::<Declaration>::new(PAGE_SIZE));

    let mut delete_target = use_signal(|| Option::<Declaration>::None);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let epoch = pager.write().begin_load(1);
            let client = make_client();
            let users = UsersService::new(&client);
            let declarations = DeclarationsService::new(&client);

            let window = pager.peek().query();
            let loaded = try_join!(
                users.find_one(&id),
                declarations.find_all_paginated(Some(window), Some(&id)),
            );
            match loaded {
                Ok((user, page)) => {
                    customer.set(Some(user));
                    pager.write().commit_page(epoch, page.data, page.total);
                }
                Err(err) if err.is_not_found() => not_found.set(true),
                Err(err) => {
                    tracing::error!(error = %err, "customer detail load failed");
                    pager.write().fail_load(epoch);
                    load_error.set(Some(err.message));
                }
            }
        }
    });

    let change_page = move |page: usize| {
        let id = id_signal.peek().clone();
        spawn(load_declarations_page(pager, id, page));
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        deleting.set(true);
        delete_error.set(None);
        spawn(async move {
            let client = make_client();
            match DeclarationsService::new(&client).remove(&target.id).await {
                Ok(()) => {
                    deleting.set(false);
                    delete_target.set(None);
                    let page = pager.peek().page_for_reload_after_delete();
                    let id = id_signal.peek().clone();
                    load_declarations_page(pager, id, page).await;
                }
                Err(err) => {
                    deleting.set(false);
                    delete_error.set(Some(err.message));
                }
            }
        });
    };

    if not_found() {
        return rsx! {
            NotFoundNotice { message: "This customer does not exist or was deleted." }
        };
    }

    let state = pager();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    class: "page-header-left",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_back.call(()),
                        "← Back"
                    }
                    if let Some(user) = customer() {
                        div {
                            h1 { class: "page-title", "{user.full_name}" }
                            p { class: "page-subtitle", "Document {user.document_number}" }
                        }
                    }
                }
                if customer().is_some() {
                    div {
                        class: "page-header-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_edit.call(id_signal.peek().clone()),
                            "Edit"
                        }
                        Button {
                            onclick: move |_| on_new_declaration.call(id_signal.peek().clone()),
                            "New declaration"
                        }
                    }
                }
            }

            if let Some(message) = load_error() {
                ErrorNotice { message }
            } else if let Some(user) = customer() {
                Card {
                    title: "Contact",
                    dl {
                        class: "detail-list",
                        div { dt { "Email" } dd { "{user.email}" } }
                        div { dt { "Phone" } dd { "{user.phone_number}" } }
                        div {
                            dt { "Status" }
                            dd {
                                if user.is_active {
                                    span { class: "badge badge-active", "Active" }
                                } else {
                                    span { class: "badge badge-inactive", "Inactive" }
                                }
                            }
                        }
                    }
                }

                Card {
                    title: "Declarations",
                    if state.is_loading() {
                        Loader {}
                    } else if state.page_items().is_empty() {
                        EmptyState { message: "No declarations for this customer yet." }
                    } else {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Year" }
                                    th { "Status" }
                                    th { "Notes" }
                                    th { "Updated" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for declaration in state.page_items().iter().cloned() {
                                    DeclarationRow {
                                        declaration,
                                        on_open: on_open_declaration,
                                        on_delete: move |target: Declaration| {
                                            delete_error.set(None);
                                            delete_target.set(Some(target));
                                        },
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        current: state.current_page(),
                        total_pages: state.total_pages(),
                        on_select: change_page,
                    }
                }
            } else {
                Loader {}
            }
        }

        if let Some(target) = delete_target() {
            ConfirmDialog {
                title: "Delete declaration",
                message: format!(
                    "Delete the {} declaration and all of its items?",
                    target.taxable_year
                ),
                confirm_label: "Delete",
                destructive: true,
                busy: deleting(),
                error: delete_error(),
                on_confirm: confirm_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

#[component]
fn DeclarationRow(
    declaration: Declaration,
    on_open: EventHandler<(String, String)>,
    on_delete: EventHandler<Declaration>,
) -> Element {
    let target = (declaration.user_id.clone(), declaration.id.clone());
    let delete_declaration = declaration.clone();
    let updated = format_date_opt(declaration.updated_at.as_deref()).to_string();
    let notes = if declaration.description.is_empty() {
        "—".to_string()
    } else {
        declaration.description.clone()
    };

    rsx! {
        tr {
            td { class: "cell-strong", "{declaration.taxable_year}" }
            td { StatusBadge { status: declaration.status } }
            td { class: "cell-muted", "{notes}" }
            td { "{updated}" }
            td {
                class: "cell-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_open.call(target.clone()),
                    "Open"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-danger-text",
                    onclick: move |_| on_delete.call(delete_declaration.clone()),
                    "Delete"
                }
            }
        }
    }
}
