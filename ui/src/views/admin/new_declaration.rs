//! New-declaration form. The year picker offers only years the customer
//! has not filed yet. The one-declaration-per-year rule is enforced here,
//! in the UI, not by the backend.

use api::services::declarations::{CreateDeclaration, DeclarationsService};
use api::services::users::UsersService;
use api::{sweep_pages, User};
use dioxus::prelude::*;
use futures::try_join;

use crate::components::{Button, ButtonVariant, Card, ErrorNotice, Loader, NotFoundNotice};
use crate::{make_client, validate};

const SWEEP_SIZE: usize = 50;

fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

#[component]
pub fn NewDeclarationView(
    customer_id: String,
    on_created: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| customer_id.clone());
    if *id_signal.peek() != customer_id {
        id_signal.set(customer_id.clone());
    }

    let mut customer = use_signal(|| Option::<User>::None);
    let mut available_years = use_signal(Vec::<i32>::new);
    let mut not_found = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut selected_year = use_signal(|| Option::<i32>::None);
    let mut description = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let client = make_client();
            let users = UsersService::new(&client);
            let declarations = DeclarationsService::new(&client);
            let declarations = &declarations;
            let id_ref = id.as_str();

            let loaded = try_join!(
                users.find_one(id_ref),
                sweep_pages(SWEEP_SIZE, move |window| {
                    declarations.find_all_paginated(Some(window), Some(id_ref))
                }),
            );
            match loaded {
                Ok((user, existing)) => {
                    let used: Vec<i32> = existing.iter().map(|d| d.taxable_year).collect();
                    let years: Vec<i32> = (2000..=current_year())
                        .rev()
                        .filter(|year| !used.contains(year))
                        .collect();
                    selected_year.set(years.first().copied());
                    available_years.set(years);
                    customer.set(Some(user));
                }
                Err(err) if err.is_not_found() => not_found.set(true),
                Err(err) => {
                    tracing::error!(error = %err, "new-declaration load failed");
                    load_error.set(Some(err.message));
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            let Some(year) = selected_year() else {
                form_error.set(Some("Pick a taxable year".to_string()));
                return;
            };
            if let Err(message) = validate::taxable_year(year) {
                form_error.set(Some(message));
                return;
            }

            saving.set(true);
            let notes = description().trim().to_string();
            let data = CreateDeclaration::new(
                id_signal.peek().clone(),
                year,
                (!notes.is_empty()).then_some(notes),
            );
            let client = make_client();
            match DeclarationsService::new(&client).create(&data).await {
                Ok(declaration) => {
                    on_created.call((declaration.user_id, declaration.id));
                }
                Err(err) => {
                    saving.set(false);
                    form_error.set(Some(err.message));
                }
            }
        });
    };

    if not_found() {
        return rsx! {
            NotFoundNotice { message: "This customer does not exist or was deleted." }
        };
    }

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "New declaration" }
                    if let Some(user) = customer() {
                        p { class: "page-subtitle", "For {user.full_name}" }
                    }
                }
            }

            if let Some(message) = load_error() {
                ErrorNotice { message }
            } else if customer().is_none() {
                Loader {}
            } else if available_years().is_empty() {
                Card {
                    p {
                        class: "cell-muted",
                        "Every year since 2000 already has a declaration for this customer."
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_cancel.call(()),
                            "Back"
                        }
                    }
                }
            } else {
                Card {
                    form {
                        class: "form",
                        onsubmit: handle_submit,

                        if let Some(message) = form_error() {
                            div { class: "form-error", "{message}" }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "taxable-year", "Taxable year" }
                            select {
                                id: "taxable-year",
                                class: "input",
                                disabled: saving(),
                                onchange: move |evt: FormEvent| {
                                    selected_year.set(evt.value().parse().ok());
                                },
                                for year in available_years() {
                                    option {
                                        value: "{year}",
                                        selected: selected_year() == Some(year),
                                        "{year}"
                                    }
                                }
                            }
                        }

                        div {
                            class: "field",
                            label { class: "field-label", r#for: "description", "Notes (optional)" }
                            textarea {
                                id: "description",
                                class: "input",
                                rows: "3",
                                placeholder: "Accountant notes for this filing",
                                value: "{description}",
                                disabled: saving(),
                                oninput: move |evt: FormEvent| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-actions",
                            Button {
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Creating…" } else { "Create declaration" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: saving(),
                                onclick: move |_| on_cancel.call(()),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
