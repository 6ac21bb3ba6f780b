//! Declaration detail: assets / income / liabilities tabs, the finalize
//! action, and the accountant's notes. Also serves the customer role in
//! read-only mode.

use api::services::declarations::{DeclarationsService, UpdateDeclaration};
use api::services::line_items::ItemKind;
use api::services::users::UsersService;
use api::{Declaration, DeclarationStatus, User};
use dioxus::prelude::*;
use futures::try_join;

use crate::components::{
    Button, ButtonVariant, Card, ConfirmDialog, ErrorNotice, Loader, NotFoundNotice, StatusBadge,
};
use crate::{make_client, use_session};

use super::line_items::LineItemsPanel;

#[component]
pub fn DeclarationDetailView(
    customer_id: String,
    declaration_id: String,
    read_only: bool,
    on_back: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut ids = use_signal(|| (customer_id.clone(), declaration_id.clone()));
    if *ids.peek() != (customer_id.clone(), declaration_id.clone()) {
        ids.set((customer_id.clone(), declaration_id.clone()));
    }

    let mut declaration = use_signal(|| Option::<Declaration>::None);
    let mut customer = use_signal(|| Option::<User>::None);
    let mut not_found = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut active_tab = use_signal(|| ItemKind::Asset);
    let mut show_finalize = use_signal(|| false);
    let mut finalizing = use_signal(|| false);
    let mut finalize_error = use_signal(|| Option::<String>::None);

    let mut notes = use_signal(String::new);
    let mut notes_saving = use_signal(|| false);
    let mut notes_saved = use_signal(|| false);
    let mut notes_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let (user_id, decl_id) = ids();
        async move {
            let client = make_client();
            let declarations = DeclarationsService::new(&client);
            let users = UsersService::new(&client);

            let loaded = try_join!(declarations.find_one(&decl_id), users.find_one(&user_id));
            match loaded {
                Ok((decl, user)) => {
                    // The declaration must actually belong to the customer in
                    // the URL; a mismatch renders as not-found.
                    if decl.user_id != user.id {
                        not_found.set(true);
                        return;
                    }
                    notes.set(decl.description.clone());
                    declaration.set(Some(decl));
                    customer.set(Some(user));
                }
                Err(err) if err.is_not_found() => not_found.set(true),
                Err(err) => {
                    tracing::error!(error = %err, "declaration detail load failed");
                    load_error.set(Some(err.message));
                }
            }
        }
    });

    let confirm_finalize = move |_| {
        finalizing.set(true);
        finalize_error.set(None);
        spawn(async move {
            let (_, decl_id) = ids.peek().clone();
            let update = UpdateDeclaration {
                status: Some(DeclarationStatus::Completed),
                description: None,
            };
            let client = make_client();
            match DeclarationsService::new(&client).update(&decl_id, &update).await {
                Ok(updated) => {
                    finalizing.set(false);
                    show_finalize.set(false);
                    declaration.set(Some(updated));
                }
                Err(err) => {
                    finalizing.set(false);
                    finalize_error.set(Some(err.message));
                }
            }
        });
    };

    let save_notes = move |_| {
        notes_saving.set(true);
        notes_saved.set(false);
        notes_error.set(None);
        spawn(async move {
            let (_, decl_id) = ids.peek().clone();
            let update = UpdateDeclaration {
                status: None,
                description: Some(notes().trim().to_string()),
            };
            let client = make_client();
            match DeclarationsService::new(&client).update(&decl_id, &update).await {
                Ok(updated) => {
                    notes_saving.set(false);
                    notes_saved.set(true);
                    declaration.set(Some(updated));
                }
                Err(err) => {
                    notes_saving.set(false);
                    notes_error.set(Some(err.message));
                }
            }
        });
    };

    if not_found() {
        return rsx! {
            NotFoundNotice { message: "This declaration does not exist or was deleted." }
        };
    }

    // Customers can only ever see their own declarations.
    if read_only {
        let own = session()
            .user
            .as_ref()
            .is_some_and(|u| u.id == ids.peek().0);
        if session().hydrated && !own {
            return rsx! {
                NotFoundNotice { message: "This declaration does not exist." }
            };
        }
    }

    let heading = match (declaration(), customer()) {
        (Some(decl), Some(user)) => Some((decl, user)),
        _ => None,
    };

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
                    if let Some((decl, user)) = heading.clone() {
                        div {
                            h1 { class: "page-title", "Declaration {decl.taxable_year}" }
                            p { class: "page-subtitle", "{user.full_name}" }
                        }
                    }
                }
                if let Some((decl, _)) = heading.clone() {
                    div {
                        class: "page-header-actions",
                        StatusBadge { status: decl.status }
                        if !read_only && decl.status == DeclarationStatus::Pending {
                            Button {
                                onclick: move |_| show_finalize.set(true),
                                "Finalize"
                            }
                        }
                    }
                }
            }

            if let Some(message) = load_error() {
                ErrorNotice { message }
            } else if heading.is_none() {
                Loader {}
            } else {
                div {
                    class: "tabs",
                    for kind in [ItemKind::Asset, ItemKind::Income, ItemKind::Liability] {
                        button {
                            class: if active_tab() == kind { "tab tab-active" } else { "tab" },
                            onclick: move |_| active_tab.set(kind),
                            "{kind.plural_label()}"
                        }
                    }
                }

                Card {
                    LineItemsPanel {
                        kind: active_tab(),
                        declaration_id: ids().1,
                        read_only,
                    }
                }

                Card {
                    title: "Accountant notes",
                    if read_only {
                        if notes().is_empty() {
                            p { class: "cell-muted", "No notes from your accountant yet." }
                        } else {
                            p { class: "notes-text", "{notes}" }
                        }
                    } else {
                        if let Some(message) = notes_error() {
                            div { class: "form-error", "{message}" }
                        }
                        textarea {
                            class: "input",
                            rows: "4",
                            placeholder: "Notes and comments",
                            value: "{notes}",
                            disabled: notes_saving(),
                            oninput: move |evt: FormEvent| {
                                notes_saved.set(false);
                                notes.set(evt.value());
                            },
                        }
                        div {
                            class: "form-actions",
                            Button {
                                disabled: notes_saving(),
                                onclick: save_notes,
                                if notes_saving() { "Saving…" } else { "Save notes" }
                            }
                            if notes_saved() {
                                span { class: "save-hint", "Saved" }
                            }
                        }
                    }
                }
            }
        }

        if show_finalize() {
            ConfirmDialog {
                title: "Finalize declaration",
                message: "Mark this declaration as completed? Line items stay editable.",
                confirm_label: "Finalize",
                busy: finalizing(),
                error: finalize_error(),
                on_confirm: confirm_finalize,
                on_cancel: move |_| show_finalize.set(false),
            }
        }
    }
}
