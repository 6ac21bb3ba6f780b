//! One tab of a declaration: a paged table of assets, income items or
//! liabilities, with a full-collection total and add/edit/delete dialogs.

use api::services::line_items::{
    CreateLineItem, ItemKind, LineItemsService, UpdateLineItem,
};
use api::{ItemSource, LineItem, ListPager};
use dioxus::prelude::*;

use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, Field, Loader, ModalOverlay, Pagination,
    SourceBadge,
};
use crate::{format_amount, make_client, validate};

const PAGE_SIZE: usize = 5;

async fn load_page(
    mut pager: Signal<ListPager<LineItem>>,
    kind: ItemKind,
    declaration_id: String,
    page: usize,
) {
    let (epoch, window) = {
        let mut p = pager.write();
        let epoch = p.begin_load(page);
        (epoch, p.query())
    };
    let client = make_client();
    let result = LineItemsService::new(&client, kind)
        .find_all_paginated(Some(window), Some(&declaration_id))
        .await;
    match result {
        Ok(fetched) => {
            pager.write().commit_page(epoch, fetched.data, fetched.total);
        }
        Err(err) => {
            tracing::error!(error = %err, kind = kind.singular_label(), "item page load failed");
            pager.write().fail_load(epoch);
        }
    }
}

/// Recompute the full-collection total. Runs after every mutation; sums
/// over all pages, not just the visible one.
async fn load_total(mut total: Signal<Option<f64>>, kind: ItemKind, declaration_id: String) {
    let client = make_client();
    match LineItemsService::new(&client, kind)
        .total_amount(&declaration_id)
        .await
    {
        Ok(sum) => total.set(Some(sum)),
        Err(err) => {
            tracing::error!(error = %err, kind = kind.singular_label(), "total load failed");
        }
    }
}

#[component]
pub fn LineItemsPanel(kind: ItemKind, declaration_id: String, read_only: bool) -> Element {
    let mut pager = use_signal(|| ListPager::<LineItem>::new(PAGE_SIZE));
    let mut total = use_signal(|| Option::<f64>::None);
    let mut editing = use_signal(|| Option::<LineItem>::None);
    let mut show_create = use_signal(|| false);
    let mut delete_target = use_signal(|| Option::<LineItem>::None);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let mut id_signal = use_signal(|| declaration_id.clone());
    if *id_signal.peek() != declaration_id {
        id_signal.set(declaration_id.clone());
    }
    // The panel instance is shared across tabs; switching tabs changes the
    // kind prop, which must re-run the loader from a clean slate.
    let mut kind_signal = use_signal(|| kind);
    if *kind_signal.peek() != kind {
        total.set(None);
        kind_signal.set(kind);
    }

    let _loader = use_resource(move || {
        let id = id_signal();
        let kind = kind_signal();
        async move {
            load_page(pager, kind, id.clone(), 1).await;
            load_total(total, kind, id).await;
        }
    });

    let change_page = move |page: usize| {
        spawn(load_page(pager, kind, id_signal.peek().clone(), page));
    };

    let after_mutation = move |reset_to_first: bool| {
        spawn(async move {
            let id = id_signal.peek().clone();
            let page = if reset_to_first {
                1
            } else {
                pager.peek().current_page()
            };
            load_page(pager, kind, id.clone(), page).await;
            load_total(total, kind, id).await;
        });
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        deleting.set(true);
        delete_error.set(None);
        spawn(async move {
            let client = make_client();
            match LineItemsService::new(&client, kind).remove(&target.id).await {
                Ok(()) => {
                    deleting.set(false);
                    delete_target.set(None);
                    let id = id_signal.peek().clone();
                    let page = pager.peek().page_for_reload_after_delete();
                    load_page(pager, kind, id.clone(), page).await;
                    load_total(total, kind, id).await;
                }
                Err(err) => {
                    deleting.set(false);
                    delete_error.set(Some(err.message));
                }
            }
        });
    };

    let state = pager();
    let total_label = total()
        .map(format_amount)
        .unwrap_or_else(|| "…".to_string());

    rsx! {
        div {
            class: "panel-header",
            p { class: "panel-total", "Total: {total_label}" }
            if !read_only {
                Button { onclick: move |_| show_create.set(true), "Add" }
            }
        }

        if state.is_loading() {
            Loader {}
        } else if state.page_items().is_empty() {
            EmptyState { message: format!("No {} recorded.", kind.plural_label().to_lowercase()) }
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Concept" }
                        th { "Amount" }
                        th { "Source" }
                        if !read_only {
                            th { "" }
                        }
                    }
                }
                tbody {
                    for item in state.page_items().iter().cloned() {
                        ItemRow {
                            item,
                            read_only,
                            on_edit: move |target: LineItem| editing.set(Some(target)),
                            on_delete: move |target: LineItem| {
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

        if show_create() {
            ItemFormDialog {
                kind,
                declaration_id: id_signal.peek().clone(),
                existing: None::<LineItem>,
                on_saved: move |_| {
                    show_create.set(false);
                    // New items sort to the front; show them.
                    after_mutation(true);
                },
                on_cancel: move |_| show_create.set(false),
            }
        }

        if let Some(item) = editing() {
            ItemFormDialog {
                kind,
                declaration_id: id_signal.peek().clone(),
                existing: Some(item),
                on_saved: move |_| {
                    editing.set(None);
                    after_mutation(false);
                },
                on_cancel: move |_| editing.set(None),
            }
        }

        if let Some(target) = delete_target() {
            ConfirmDialog {
                title: format!("Delete {}", kind.singular_label()),
                message: format!("Delete \"{}\"?", target.concept),
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
fn ItemRow(
    item: LineItem,
    read_only: bool,
    on_edit: EventHandler<LineItem>,
    on_delete: EventHandler<LineItem>,
) -> Element {
    let edit_item = item.clone();
    let delete_item = item.clone();
    let amount = format_amount(item.amount);

    rsx! {
        tr {
            td { class: "cell-strong", "{item.concept}" }
            td { class: "cell-amount", "{amount}" }
            td { SourceBadge { source: item.source } }
            if !read_only {
                td {
                    class: "cell-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(edit_item.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "btn-danger-text",
                        onclick: move |_| on_delete.call(delete_item.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Create/edit dialog for one line item. The data source is chosen at
/// creation and shown read-only afterwards: it is immutable, like the
/// owning declaration.
#[component]
fn ItemFormDialog(
    kind: ItemKind,
    declaration_id: String,
    existing: Option<LineItem>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_edit = existing.is_some();
    let initial_concept = existing.as_ref().map(|i| i.concept.clone()).unwrap_or_default();
    let initial_amount = existing
        .as_ref()
        .map(|i| i.amount.to_string())
        .unwrap_or_default();
    let existing_source = existing.as_ref().map(|i| i.source);
    let item_id = existing.as_ref().map(|i| i.id.clone());

    let mut concept = use_signal(|| initial_concept);
    let mut amount = use_signal(|| initial_amount);
    let mut source = use_signal(|| existing_source.unwrap_or(ItemSource::Manual));
    let mut concept_error = use_signal(|| Option::<String>::None);
    let mut amount_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let declaration_id_submit = declaration_id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let declaration_id = declaration_id_submit.clone();
        let item_id = item_id.clone();
        spawn(async move {
            form_error.set(None);
            concept_error.set(validate::concept(&concept()).err());
            let parsed = match validate::parse_amount(&amount()) {
                Ok(value) => {
                    amount_error.set(None);
                    Some(value)
                }
                Err(message) => {
                    amount_error.set(Some(message));
                    None
                }
            };
            let Some(parsed) = parsed else { return };
            if concept_error().is_some() {
                return;
            }

            saving.set(true);
            let client = make_client();
            let service = LineItemsService::new(&client, kind);
            let result = match &item_id {
                Some(id) => {
                    let update = UpdateLineItem {
                        concept: Some(concept().trim().to_string()),
                        amount: Some(parsed),
                    };
                    service.update(id, &update).await.map(|_| ())
                }
                None => {
                    let create = CreateLineItem {
                        declaration_id,
                        concept: concept().trim().to_string(),
                        amount: parsed,
                        source: *source.peek(),
                    };
                    service.create(&create).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => {
                    saving.set(false);
                    form_error.set(Some(err.message));
                }
            }
        });
    };

    let title = if is_edit {
        format!("Edit {}", kind.singular_label())
    } else {
        format!("Add {}", kind.singular_label())
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            h2 { class: "modal-title", "{title}" }

            form {
                class: "form",
                onsubmit: handle_submit,

                if let Some(message) = form_error() {
                    div { class: "form-error", "{message}" }
                }

                Field {
                    id: "item-concept",
                    label: "Concept",
                    placeholder: "e.g. Apartment",
                    value: concept(),
                    disabled: saving(),
                    error: concept_error(),
                    oninput: move |evt: FormEvent| concept.set(evt.value()),
                }

                Field {
                    id: "item-amount",
                    label: "Amount",
                    placeholder: "0",
                    value: amount(),
                    disabled: saving(),
                    error: amount_error(),
                    oninput: move |evt: FormEvent| amount.set(evt.value()),
                }

                div {
                    class: "field",
                    label { class: "field-label", r#for: "item-source", "Source" }
                    if let Some(fixed) = existing_source {
                        p { class: "cell-muted", "{fixed.label()} (fixed at creation)" }
                    } else {
                        select {
                            id: "item-source",
                            class: "input",
                            disabled: saving(),
                            onchange: move |evt: FormEvent| {
                                source.set(if evt.value() == "exogeno" {
                                    ItemSource::Exogeno
                                } else {
                                    ItemSource::Manual
                                });
                            },
                            option { value: "manual", "Manual" }
                            option { value: "exogeno", "Exogenous file" }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving…" } else { "Save" }
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
