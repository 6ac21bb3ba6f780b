//! Global declarations list across every customer.

use api::services::declarations::DeclarationsService;
use api::{sweep_pages, Declaration, ListPager};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, EmptyState, Loader, Pagination, SearchBox, StatusBadge};
use crate::{format_date_opt, make_client};

const PAGE_SIZE: usize = 10;
const SWEEP_SIZE: usize = 50;

fn matches(declaration: &Declaration, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    declaration.taxable_year.to_string().contains(q.as_str())
        || declaration
            .user_full_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&q))
        || declaration.status.label().to_lowercase().contains(&q)
}

async fn load_page(mut pager: Signal<ListPager<Declaration>>, page: usize) {
    let (epoch, window) = {
        let mut p = pager.write();
        let epoch = p.begin_load(page);
        (epoch, p.query())
    };
    let client = make_client();
    let result = DeclarationsService::new(&client)
        .find_all_paginated(Some(window), None)
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

async fn run_search(mut pager: Signal<ListPager<Declaration>>, query: String) {
    let epoch = pager.write().begin_search(query.clone());
    let client = make_client();
    let service = DeclarationsService::new(&client);
    let service = &service;
    let result = sweep_pages(SWEEP_SIZE, move |window| {
        service.find_all_paginated(Some(window), None)
    })
    .await;
    match result {
        Ok(all) => {
            pager
                .write()
                .commit_search(epoch, all, |declaration| matches(declaration, &query));
        }
        Err(err) => {
            tracing::error!(error = %err, "declaration search sweep failed");
            pager.write().fail_load(epoch);
        }
    }
}

#[component]
pub fn DeclarationsView(on_open: EventHandler<(String, String)>) -> Element {
    let mut pager = use_signal(|| ListPager::<Declaration>::new(PAGE_SIZE));

    let _initial = use_resource(move || load_page(pager, 1));

    let on_search = move |value: String| {
        if value.trim().is_empty() {
            pager.write().clear_search();
            spawn(load_page(pager, 1));
            return;
        }
        let warm = {
            let q = value.clone();
            pager
                .write()
                .refilter(value.clone(), move |d| matches(d, &q))
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

    let state = pager();
    let empty_message = if state.is_search_mode() {
        "No declarations match the search.".to_string()
    } else {
        "No declarations yet.".to_string()
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Declarations" }
                    p { class: "page-subtitle", "Every filing across all customers" }
                }
            }

            Card {
                SearchBox {
                    placeholder: "Search by customer, year or status…",
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
                                th { "Customer" }
                                th { "Year" }
                                th { "Status" }
                                th { "Updated" }
                                th { "" }
                            }
                        }
                        tbody {
                            for declaration in state.page_items().iter().cloned() {
                                Row { declaration, on_open }
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
    }
}

#[component]
fn Row(declaration: Declaration, on_open: EventHandler<(String, String)>) -> Element {
    let target = (declaration.user_id.clone(), declaration.id.clone());
    let customer = declaration
        .user_full_name
        .clone()
        .unwrap_or_else(|| "Unknown customer".to_string());
    let updated = format_date_opt(declaration.updated_at.as_deref()).to_string();

    rsx! {
        tr {
            td { class: "cell-strong", "{customer}" }
            td { "{declaration.taxable_year}" }
            td { StatusBadge { status: declaration.status } }
            td { "{updated}" }
            td {
                class: "cell-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_open.call(target.clone()),
                    "Open"
                }
            }
        }
    }
}
