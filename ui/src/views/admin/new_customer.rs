//! Create-customer form. Accounts go through the registration endpoint;
//! the admin's own session is untouched by the token that comes back.

use api::services::auth::{AuthService, RegisterUser};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Field};
use crate::{make_client, validate};

#[component]
pub fn NewCustomerView(on_saved: EventHandler<String>, on_cancel: EventHandler<()>) -> Element {
    let mut full_name = use_signal(String::new);
    let mut document_number = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut password = use_signal(String::new);

    let mut name_error = use_signal(|| Option::<String>::None);
    let mut document_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut phone_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            name_error.set(validate::full_name(&full_name()).err());
            document_error.set(validate::document_number(&document_number()).err());
            email_error.set(validate::email(&email()).err());
            phone_error.set(validate::phone_number(&phone_number()).err());
            password_error.set(validate::new_password(&password()).err());
            let invalid = name_error().is_some()
                || document_error().is_some()
                || email_error().is_some()
                || phone_error().is_some()
                || password_error().is_some();
            if invalid {
                return;
            }

            saving.set(true);
            let data = RegisterUser {
                full_name: full_name().trim().to_string(),
                document_number: document_number().trim().to_string(),
                email: email().trim().to_string(),
                phone_number: phone_number().trim().to_string(),
                password: password(),
            };
            let client = make_client();
            match AuthService::new(&client).register(&data).await {
                Ok(user) => on_saved.call(user.id),
                Err(err) => {
                    saving.set(false);
                    form_error.set(Some(err.message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "New customer" }
                    p { class: "page-subtitle", "Register a customer account" }
                }
            }

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
                        id: "document-number",
                        label: "Document number",
                        value: document_number(),
                        disabled: saving(),
                        error: document_error(),
                        oninput: move |evt: FormEvent| document_number.set(evt.value()),
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
                    Field {
                        id: "password",
                        label: "Initial password",
                        r#type: "password",
                        value: password(),
                        disabled: saving(),
                        error: password_error(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Creating…" } else { "Create customer" }
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
