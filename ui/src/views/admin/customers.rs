//! Customer list: paged browsing, full-scan search, delete with
//! confirmation.

use api::services::users::UsersService;
use api::{sweep_pages, ListPager, User};
use dioxus::prelude::*;

use crate::components::{
    Button, ButtonVariant, Card, ConfirmDialog, EmptyState, Loader, Pagination, SearchBox,
};
use crate::{format_date_opt, make_client};

const PAGE_SIZE: usize = 10;
const SWEEP_SIZE: usize = 50;

fn matches(user: &User, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    user.full_name.to_lowercase().contains(&q)
        || user.document_number.contains(q.as_str())
        || user.email.to_lowercase().contains(&q)
}

async fn load_page(mut pager: Signal<ListPager<User>>, page: usize) {
    let (epoch, window) = {
        let mut p = pager.write();
        let epoch = p.begin_load(page);
        (epoch, p.query())
    };
    let client = make_client();
    match UsersService::new(&client).find_all_paginated(Some(window)).await {
        Ok(fetched) => {
            pager.write().commit_page(epoch, fetched.data, fetched.total);
        }
        Err(err) => {
            tracing::error!(error = %err, "customer page load failed");
            pager.write().fail_load(epoch);
        }
    }
}

async fn run_search(mut pager: Signal<ListPager<User>>, query: String) {
    let epoch = pager.write().begin_search(query.clone());
    let client = make_client();
    let service = UsersService::new(&client);
    let service = &service;
    let result = sweep_pages(SWEEP_SIZE, move |window| {
        service.find_all_paginated(Some(window))
    })
    .await;
    match result {
        Ok(all) => {
            pager
                .write()
                .commit_search(epoch, all, |user| matches(user, &query));
        }
        Err(err) => {
            tracing::error!(error = %err, "customer search sweep failed");
            pager.write().fail_load(epoch);
        }
    }
}

#[component]
pub fn CustomersView(
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_new: EventHandler<()>,
) -> Element {
    let mut pager = use_signal(|| ListPager::<User>::new(PAGE_SIZE));
    let mut delete_target = use_signal(|| Option::<User>::None);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let _initial = use_resource(move || load_page(pager, 1));

    let on_search = move |value: String| {
        if value.trim().is_empty() {
            pager.write().clear_search();
            spawn(load_page(pager, 1));
            return;
        }
        let warm = {
            let q = value.clone();
            pager.write().refilter(value.clone(), move |u| matches(u, &q))
        };
        if !warm {
            spawn(run_search(pager, value));
        }
    };

    let change_page = move |page: usize| {
        if pager.peek().is_search_mode() {
            pager.write().set_page(page);
        } else {
            spawn(load_page(pager, page));
        }
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        deleting.set(true);
        delete_error.set(None);
        spawn(async move {
            let client = make_client();
            match UsersService::new(&client).remove(&target.id).await {
                Ok(()) => {
                    deleting.set(false);
                    delete_target.set(None);
                    if pager.peek().is_search_mode() {
                        let query = pager.peek().search_query().to_string();
                        run_search(pager, query).await;
                    } else {
                        let page = pager.peek().page_for_reload_after_delete();
                        load_page(pager, page).await;
                    }
                }
                Err(err) => {
                    deleting.set(false);
                    delete_error.set(Some(err.message));
                }
            }
        });
    };

    let state = pager();
    let empty_message = if state.is_search_mode() {
        "No customers match the search.".to_string()
    } else {
        "No customers yet.".to_string()
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Customers" }
                    p { class: "page-subtitle", "Manage customer records" }
                }
                Button { onclick: move |_| on_new.call(()), "New customer" }
            }

            Card {
                SearchBox {
                    placeholder: "Search by name, document or email…",
                    value: state.search_query().to_string(),
                    searching: state.is_searching(),
                    oninput: on_search,
                }

                if state.is_loading() || state.is_searching() {
                    Loader {}
                } else if state.page_items().is_empty() {
                    EmptyState { message: empty_message }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Document" }
                                th { "Email" }
                                th { "Phone" }
                                th { "Status" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            for user in state.page_items().iter().cloned() {
                                CustomerRow {
                                    user,
                                    on_open,
                                    on_edit,
                                    on_delete: move |target: User| {
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
        }

        if let Some(target) = delete_target() {
            ConfirmDialog {
                title: "Delete customer",
                message: format!(
                    "Delete {} and every declaration attached to them? This cannot be undone.",
                    target.full_name
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
fn CustomerRow(
    user: User,
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<User>,
) -> Element {
    let open_id = user.id.clone();
    let edit_id = user.id.clone();
    let delete_user = user.clone();
    let created = format_date_opt(user.created_at.as_deref()).to_string();

    rsx! {
        tr {
            td { class: "cell-strong", "{user.full_name}" }
            td { "{user.document_number}" }
            td { "{user.email}" }
            td { "{user.phone_number}" }
            td {
                if user.is_active {
                    span { class: "badge badge-active", "Active" }
                } else {
                    span { class: "badge badge-inactive", "Inactive" }
                }
            }
            td { "{created}" }
            td {
                class: "cell-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_open.call(open_id.clone()),
                    "View"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-danger-text",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    "Delete"
                }
            }
        }
    }
}
