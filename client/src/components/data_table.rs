//! Record table driven by a schema's column list.

use leptos::prelude::*;
use portal::Record;
use portal::schema::ColumnSpec;

#[component]
pub fn DataTable(
    columns: &'static [ColumnSpec],
    #[prop(into)] rows: Signal<Vec<Record>>,
    #[prop(optional)] on_edit: Option<Callback<Record>>,
    #[prop(optional)] on_delete: Option<Callback<Record>>,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let span = columns.len() + usize::from(has_actions);
    let empty_text = empty_text.unwrap_or_else(|| "No records yet.".to_owned());
    let disabled = move || busy.is_some_and(|b| b.get());

    view! {
        <div class="data-table__wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        {columns.iter().map(|c| view! { <th>{c.header}</th> }).collect::<Vec<_>>()}
                        {has_actions.then(|| view! { <th class="data-table__actions">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="data-table__empty" colspan=span.to_string()>
                                        {empty_text.clone()}
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let cells = columns
                                    .iter()
                                    .map(|c| view! { <td>{row.text(c.field)}</td> })
                                    .collect::<Vec<_>>();
                                let edit = on_edit.map(|cb| {
                                    let target = row.clone();
                                    view! {
                                        <button
                                            class="btn btn--small"
                                            disabled=disabled
                                            on:click=move |_| cb.run(target.clone())
                                        >
                                            "Edit"
                                        </button>
                                    }
                                });
                                let delete = on_delete.map(|cb| {
                                    let target = row.clone();
                                    view! {
                                        <button
                                            class="btn btn--small btn--danger"
                                            disabled=disabled
                                            on:click=move |_| cb.run(target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    }
                                });
                                view! {
                                    <tr>
                                        {cells}
                                        {has_actions.then(|| view! { <td class="data-table__actions">{edit}{delete}</td> })}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
