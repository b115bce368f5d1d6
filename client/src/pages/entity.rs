//! Generic CRUD screen for one entity table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/admin/{entity}` resolves the slug to an `EntityKind` and renders a list,
//! a filter box, a create/edit modal and a delete confirmation, all driven by
//! that entity's schema.
//!
//! The list only changes once the backend confirms a write (no optimistic
//! rows), and a second submit is refused while one is in flight.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::crud::{self, CrudState};
use portal::{EntityKind, EntitySchema, Record};
use serde_json::{Map, Value};

use crate::app::AppSession;
use crate::components::admin_sidebar::AdminLayout;
use crate::components::data_table::DataTable;
use crate::components::entity_form::EntityForm;
use crate::components::guard::AdminRoute;
use crate::components::modal::{ConfirmDialog, Modal};
use crate::state::editor::{EditorMode, EditorState};

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

pub fn delete_message(schema: &EntitySchema, record: &Record) -> String {
    let name = schema
        .columns
        .first()
        .map(|c| record.text(c.field))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("this {}", schema.singular.to_lowercase()));
    format!("Delete {name}? This cannot be undone.")
}

#[component]
pub fn EntityPage() -> impl IntoView {
    let params = use_params_map();
    let kind = Memo::new(move |_| params.read().get("entity").and_then(|slug| EntityKind::from_slug(&slug)));

    view! {
        <AdminRoute>
            <AdminLayout>
                {move || match kind.get() {
                    Some(kind) => view! { <EntityScreen kind=kind/> }.into_any(),
                    None => view! { <p class="page-error">"Unknown section."</p> }.into_any(),
                }}
            </AdminLayout>
        </AdminRoute>
    }
}

#[component]
fn EntityScreen(kind: EntityKind) -> impl IntoView {
    let schema = kind.schema();
    let session = expect_context::<AppSession>();
    let configured = session.client().is_configured();
    let crud = RwSignal::new(CrudState::default());
    let editor = RwSignal::new(None::<EditorState>);
    let pending_delete = RwSignal::new(None::<Record>);

    load(session.clone(), schema, crud);

    let rows = Signal::derive(move || crud.with(|s| s.visible(schema)));
    let busy = Signal::derive(move || crud.with(|s| s.in_flight));
    let error = move || crud.with(|s| s.error.clone());

    let on_edit = Callback::new(move |record: Record| {
        crud.update(CrudState::clear_error);
        editor.set(EditorState::edit(schema, &record));
    });
    let on_delete = Callback::new(move |record: Record| pending_delete.set(Some(record)));
    let close_editor = Callback::new(move |()| editor.set(None));
    let cancel_delete = Callback::new(move |()| pending_delete.set(None));

    let confirm_delete = {
        let session = session.clone();
        Callback::new(move |()| {
            let Some(id) = pending_delete.with_untracked(|r| r.as_ref().and_then(Record::id)) else {
                return;
            };
            if !crud.try_update(CrudState::try_begin_mutation).unwrap_or(false) {
                return;
            }
            remove(session.clone(), schema, crud, pending_delete, id);
        })
    };

    view! {
        <div class="entity-page">
            <header class="entity-page__header">
                <h1 class="page-title">{schema.title}</h1>
                <input
                    class="entity-page__filter"
                    type="search"
                    placeholder=format!("Search {}", schema.title.to_lowercase())
                    prop:value=move || crud.with(|s| s.filter.clone())
                    on:input=move |ev| crud.update(|s| s.filter = event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get() || !configured
                    on:click=move |_| {
                        crud.update(CrudState::clear_error);
                        editor.set(Some(EditorState::create(schema)));
                    }
                >
                    {format!("Add {}", schema.singular)}
                </button>
            </header>
            <Show when=move || error().is_some() && editor.with(Option::is_none)>
                <p class="page-error">{move || error().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !crud.with(|s| s.loading) fallback=|| view! { <p>"Loading..."</p> }>
                <DataTable columns=schema.columns rows=rows on_edit=on_edit on_delete=on_delete busy=busy/>
            </Show>

            {
                let session = session.clone();
                move || {
                    editor
                        .get()
                        .map(|initial| {
                            let title = initial.title(schema);
                            let form_state = RwSignal::new(initial);
                            let session = session.clone();
                            let submit = Callback::new(move |()| {
                                let Some(row) = form_state.try_update(|e| e.payload(schema)).flatten() else {
                                    return;
                                };
                                if !crud.try_update(CrudState::try_begin_mutation).unwrap_or(false) {
                                    return;
                                }
                                let mode = form_state.with_untracked(|e| e.mode.clone());
                                save(session.clone(), schema, crud, editor, mode, row);
                            });
                            view! {
                                <Modal title=title on_close=close_editor>
                                    <Show when=move || error().is_some()>
                                        <p class="page-error">{move || error().unwrap_or_default()}</p>
                                    </Show>
                                    <EntityForm
                                        schema=schema
                                        editor=form_state
                                        busy=busy
                                        on_submit=submit
                                        on_cancel=close_editor
                                    />
                                </Modal>
                            }
                        })
                }
            }

            {move || {
                pending_delete
                    .get()
                    .map(|record| {
                        view! {
                            <ConfirmDialog
                                title=format!("Delete {}", schema.singular)
                                message=delete_message(schema, &record)
                                busy=busy
                                on_confirm=confirm_delete
                                on_cancel=cancel_delete
                            />
                        }
                    })
            }}
        </div>
    }
}

fn load(session: AppSession, schema: &'static EntitySchema, crud: RwSignal<CrudState>) {
    crud.update(CrudState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.access_token();
        let result = crud::fetch_all(session.client(), schema, token.as_deref()).await;
        crud.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, schema);
}

fn save(
    session: AppSession,
    schema: &'static EntitySchema,
    crud: RwSignal<CrudState>,
    editor: RwSignal<Option<EditorState>>,
    mode: EditorMode,
    row: Map<String, Value>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.access_token();
        let committed = match mode {
            EditorMode::Create => {
                let result = crud::create(session.client(), schema, &row, token.as_deref()).await;
                crud.try_update(|s| s.finish_create(schema, result))
            }
            EditorMode::Edit(id) => {
                let result = crud::update(session.client(), schema, &id, &row, token.as_deref()).await;
                crud.try_update(|s| s.finish_update(result))
            }
        };
        if committed == Some(true) {
            editor.set(None);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, schema, crud, editor, mode, row);
}

fn remove(
    session: AppSession,
    schema: &'static EntitySchema,
    crud: RwSignal<CrudState>,
    pending_delete: RwSignal<Option<Record>>,
    id: portal::RecordId,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.access_token();
        let result = crud::remove(session.client(), schema, &id, token.as_deref()).await;
        crud.update(|s| {
            s.finish_delete(&id, result);
        });
        pending_delete.set(None);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, schema, crud, pending_delete, id);
}
