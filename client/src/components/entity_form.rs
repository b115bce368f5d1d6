//! Schema-driven create/edit form.
//!
//! Every field of the schema is rendered from its `FieldKind`; validation
//! messages come back through the editor state and are shown under the
//! offending input.

use leptos::prelude::*;
use portal::schema::{FieldKind, FieldSpec};
use portal::EntitySchema;

use crate::state::editor::EditorState;

#[cfg(test)]
#[path = "entity_form_test.rs"]
mod entity_form_test;

pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "number",
        FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
    }
}

pub fn field_label(spec: &FieldSpec) -> String {
    if spec.required { format!("{} *", spec.label) } else { spec.label.to_owned() }
}

fn field_input(spec: &'static FieldSpec, editor: RwSignal<EditorState>) -> AnyView {
    let name = spec.name;
    let value = move || editor.with(|e| e.value(name));
    let set = move |raw: String| editor.update(|e| e.set_value(name, raw));

    match spec.kind {
        FieldKind::Text => view! {
            <input
                class="dialog__input"
                type=input_type(spec.kind)
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                class="dialog__input"
                type=input_type(spec.kind)
                step="any"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="dialog__input dialog__input--area"
                rows="4"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select class="dialog__input" on:change=move |ev| set(event_target_value(&ev))>
                {(!spec.required).then(|| view! { <option value="" selected=move || value().is_empty()>"(none)"</option> })}
                {options
                    .iter()
                    .map(|o| {
                        let option_value = o.value;
                        view! {
                            <option value=option_value selected=move || value() == option_value>
                                {o.label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
    }
}

#[component]
pub fn EntityForm(
    schema: &'static EntitySchema,
    editor: RwSignal<EditorState>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            {schema
                .fields
                .iter()
                .map(|spec| {
                    let name = spec.name;
                    let error = move || editor.with(|e| e.error_for(name));
                    view! {
                        <label class="dialog__label">
                            {field_label(spec)}
                            {field_input(spec, editor)}
                            <Show when=move || error().is_some()>
                                <span class="field-error">{move || error().unwrap_or_default()}</span>
                            </Show>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
