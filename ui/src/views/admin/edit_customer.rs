//! Edit-customer form. Only the mutable subset is shown: the document
//! number and role are fixed at registration.

use api::services::users::{UpdateUser, UsersService};
use api::User;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Field, Loader, NotFoundNotice};
use crate::{make_client, validate};

#[component]
pub fn EditCustomerView(
    customer_id: String,
    on_saved: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| customer_id.clone());
    if *id_signal.peek() != customer_id {
        id_signal.set(customer_id.clone());
    }

    let mut customer = use_signal(|| Option::<User>::None);
    let mut not_found = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut is_active = use_signal(|| true);

    let mut name_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut phone_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let client = make_client();
            match UsersService::new(&client).find_one(&id).await {
                Ok(user) => {
                    full_name.set(user.full_name.clone());
                    email.set(user.email.clone());
                    phone_number.set(user.phone_number.clone());
                    is_active.set(user.is_active);
                    customer.set(Some(user));
                }
                Err(err) if err.is_not_found() => not_found.set(true),
                Err(err) => {
                    tracing::error!(error = %err, "customer load failed");
                    load_error.set(Some(err.message));
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            name_error.set(validate::full_name(&full_name()).err());
            email_error.set(validate::email(&email()).err());
            phone_error.set(validate::phone_number(&phone_number()).err());
            if name_error().is_some() || email_error().is_some() || phone_error().is_some() {
                return;
            }

            saving.set(true);
            let update = UpdateUser {
                full_name: Some(full_name().trim().to_string()),
                email: Some(email().trim().to_string()),
                phone_number: Some(phone_number().trim().to_string()),
                is_active: Some(is_active()),
            };
            let client = make_client();
            let id = id_signal.peek().clone();
            match UsersService::new(&client).update(&id, &update).await {
                Ok(user) => on_saved.call(user.id),
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
                    h1 { class: "page-title", "Edit customer" }
                    if let Some(user) = customer() {
                        p { class: "page-subtitle", "Document {user.document_number}" }
                    }
                }
            }

            if let Some(message) = load_error() {
                div { class: "form-error", "{message}" }
            } else if customer().is_none() {
                Loader {}
            } else {
                Card {
                    form {
                        class: "form",
                        onsubmit: handle_submit,

                        if let Some(message) = form_error() {
                            div { class: "form-error", "{message}" }
                        }

                        Field {
                            id: "full-name",
                            label: "Full name",
                            value: full_name(),
                            disabled: saving(),
                            error: name_error(),
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
                        }
                        Field {
                            id: "email",
                            label: "Email",
                            r#type: "email",
                            value: email(),
                            disabled: saving(),
                            error: email_error(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Field {
                            id: "phone-number",
                            label: "Phone number",
                            value: phone_number(),
                            disabled: saving(),
                            error: phone_error(),
                            oninput: move |evt: FormEvent| phone_number.set(evt.value()),
                        }

                        label {
                            class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: is_active(),
                                disabled: saving(),
                                onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                            }
                            "Account is active"
                        }

                        div {
                            class: "form-actions",
                            Button {
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving…" } else { "Save changes" }
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
