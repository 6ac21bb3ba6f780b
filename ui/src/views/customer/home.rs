//! Customer home: the customer's own declarations, read-only.

use api::services::declarations::DeclarationsService;
use api::{Declaration, ListPager};
use dioxus::prelude::*;

use crate::components::{
    Button, ButtonVariant, Card, EmptyState, Loader, Pagination, StatusBadge,
};
use crate::{format_date_opt, make_client, use_session};

const PAGE_SIZE: usize = 10;

async fn load_page(mut pager: Signal<ListPager<Declaration>>, user_id: String, page: usize) {
    let (epoch, window) = {
        let mut p = pager.write();
        let epoch = p.begin_load(page);
        (epoch, p.query())
    };
    let client = make_client();
    let result = DeclarationsService::new(&client)
        .find_all_paginated(Some(window), Some(&user_id))
        .await;
    match result {
        Ok(fetched) => {
            pager.write().commit_page(epoch, fetched.data, fetched.total);
        }
        Err(err) => {
            tracing::error!(error = %err, "own declarations load failed");
            pager.write().fail_load(epoch);
        }
    }
}

#[component]
pub fn MyDeclarationsView(on_open: EventHandler<String>) -> Element {
    let session = use_session();
    let mut pager = use_signal(|| ListPager::<Declaration>::new(PAGE_SIZE));

    let user_id = session().user.as_ref().map(|u| u.id.clone());
    let mut user_signal = use_signal(|| user_id.clone());
    if *user_signal.peek() != user_id {
        user_signal.set(user_id.clone());
    }

    let _loader = use_resource(move || {
        let user_id = user_signal();
        async move {
            if let Some(user_id) = user_id {
                load_page(pager, user_id, 1).await;
            }
        }
    });

    let change_page = move |page: usize| {
        if let Some(user_id) = user_signal.peek().clone() {
            spawn(load_page(pager, user_id, page));
        }
    };

    let state = pager();
    let greeting = session()
        .user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "My declarations" }
                    p { class: "page-subtitle", "Welcome back, {greeting}" }
                }
            }

            Card {
                if state.is_loading() {
                    Loader {}
                } else if state.page_items().is_empty() {
                    EmptyState { message: "Your accountant has not filed any declarations yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Year" }
                                th { "Status" }
                                th { "Last update" }
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
fn Row(declaration: Declaration, on_open: EventHandler<String>) -> Element {
    let id = declaration.id.clone();
    let updated = format_date_opt(declaration.updated_at.as_deref()).to_string();

    rsx! {
        tr {
            td { class: "cell-strong", "{declaration.taxable_year}" }
            td { StatusBadge { status: declaration.status } }
            td { "{updated}" }
            td {
                class: "cell-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_open.call(id.clone()),
                    "View"
                }
            }
        }
    }
}
