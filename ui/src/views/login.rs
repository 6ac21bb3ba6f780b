//! Login page: document number + password.

use api::services::auth::{AuthService, Credentials};
use api::User;
use dioxus::prelude::*;

use crate::components::{Button, Field};
use crate::{complete_login, make_client, use_session, validate};

#[component]
pub fn LoginView(on_logged_in: EventHandler<User>) -> Element {
    let mut session = use_session();
    let mut document_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut document_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            document_error.set(validate::document_number(&document_number()).err());
            password_error.set(validate::login_password(&password()).err());
            if document_error().is_some() || password_error().is_some() {
                return;
            }

            loading.set(true);
            let credentials = Credentials {
                document_number: document_number().trim().to_string(),
                password: password(),
            };
            let client = make_client();
            match AuthService::new(&client).login(&credentials).await {
                Ok(response) => {
                    complete_login(&mut session, response.user.clone(), response.token);
                    on_logged_in.call(response.user);
                }
                Err(err) => {
                    loading.set(false);
                    let message = if err.is_unauthorized() {
                        "Incorrect document number or password".to_string()
                    } else if err.is_network() {
                        "Could not reach the server. Check your connection.".to_string()
                    } else {
                        err.message
                    };
                    form_error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-panel",
                h1 { class: "login-brand", "ExoTrack" }
                p { class: "login-subtitle", "Tax declaration tracking" }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,

                    if let Some(message) = form_error() {
                        div { class: "form-error", "{message}" }
                    }

                    Field {
                        id: "document",
                        label: "Document number",
                        placeholder: "Enter your document number",
                        value: document_number(),
                        disabled: loading(),
                        error: document_error(),
                        oninput: move |evt: FormEvent| document_number.set(evt.value()),
                    }

                    Field {
                        id: "password",
                        label: "Password",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: password(),
                        disabled: loading(),
                        error: password_error(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: loading(),
                        if loading() { "Signing in…" } else { "Sign in" }
                    }
                }
            }
        }
    }
}
