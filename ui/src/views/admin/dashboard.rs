//! Admin dashboard: stats tiles and the recent-activity feed.
//!
//! The three aggregate endpoints load concurrently; either failure aborts
//! the combined view and surfaces one error notice.

use api::services::declarations::DeclarationsService;
use api::services::users::UsersService;
use api::{DeclarationStats, RecentActivity, UserStats};
use dioxus::prelude::*;
use futures::try_join;

use crate::components::{Card, EmptyState, ErrorNotice, Loader, StatCard, StatusBadge};
use crate::{format_date_opt, make_client};

type DashboardData = (UserStats, DeclarationStats, Vec<RecentActivity>);

#[component]
pub fn DashboardView(on_open_declaration: EventHandler<(String, String)>) -> Element {
    let mut data = use_signal(|| Option::<DashboardData>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let client = make_client();
        let users = UsersService::new(&client);
        let declarations = DeclarationsService::new(&client);

        let loaded = try_join!(
            users.stats(),
            declarations.stats(),
            declarations.recent_activity(),
        );
        match loaded {
            Ok(combined) => {
                error.set(None);
                data.set(Some(combined));
            }
            Err(err) => {
                tracing::error!(error = %err, "dashboard load failed");
                error.set(Some(err.message));
            }
        }
    });

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Activity across all customers" }
                }
            }

            if let Some(message) = error() {
                ErrorNotice { message }
            } else if let Some((user_stats, declaration_stats, activity)) = data() {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Customers",
                        value: "{user_stats.total}",
                        hint: format!("{} active", user_stats.active),
                    }
                    StatCard {
                        label: "Declarations",
                        value: "{declaration_stats.total}",
                    }
                    StatCard {
                        label: "Pending",
                        value: "{declaration_stats.pending}",
                    }
                    StatCard {
                        label: "Completed",
                        value: "{declaration_stats.completed}",
                    }
                }

                Card {
                    title: "Recent activity",
                    if activity.is_empty() {
                        EmptyState { message: "No declarations have been touched yet." }
                    } else {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Customer" }
                                    th { "Year" }
                                    th { "Status" }
                                    th { "Updated" }
                                }
                            }
                            tbody {
                                for entry in activity.iter().cloned() {
                                    ActivityRow { entry, on_open: on_open_declaration }
                                }
                            }
                        }
                    }
                }
            } else {
                Loader {}
            }
        }
    }
}

#[component]
fn ActivityRow(entry: RecentActivity, on_open: EventHandler<(String, String)>) -> Element {
    let target = (entry.user_id.clone(), entry.id.clone());
    let customer = entry
        .user_full_name
        .clone()
        .unwrap_or_else(|| "Unknown customer".to_string());
    let updated = format_date_opt(entry.updated_at.as_deref()).to_string();

    rsx! {
        tr {
            class: "row-link",
            onclick: move |_| on_open.call(target.clone()),
            td { class: "cell-strong", "{customer}" }
            td { "{entry.taxable_year}" }
            td { StatusBadge { status: entry.status } }
            td { "{updated}" }
        }
    }
}
