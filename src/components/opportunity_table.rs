//! Opportunity Table
//!
//! Renders the displayed rows with the view-model's column descriptors.
//! Button columns dispatch their row action; the mark-closed button takes
//! its label and disabled state from the decorated row.

use leptos::prelude::*;

use opportunity_core::{ColumnDef, ColumnKind, OpportunityRow};

use crate::context::{use_board, BoardContext};

#[component]
pub fn OpportunityTable() -> impl IntoView {
    let board = use_board();
    let columns = StoredValue::new(board.manager().columns());

    let fault = move || board.snapshot.with(|s| s.fault.as_ref().map(|f| f.to_string()));

    view! {
        <Show when=move || fault().is_some()>
            <div class="error-banner">{move || fault().unwrap_or_default()}</div>
        </Show>
        <table class="opportunity-table">
            <thead>
                <tr>
                    {columns
                        .get_value()
                        .into_iter()
                        .map(|col| {
                            let width = col.initial_width.map(|w| format!("width: {}px", w));
                            view! {
                                <th class:sortable=col.sortable style=width>
                                    {col.label.unwrap_or_default()}
                                </th>
                            }
                        })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let cols = columns.get_value();
                    board
                        .snapshot
                        .get()
                        .rows
                        .into_iter()
                        .map(|row| render_row(board, &cols, row))
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

fn render_row(board: BoardContext, columns: &[ColumnDef], row: OpportunityRow) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|col| match &col.button {
            Some(button) => {
                let label = col.button_label(&row).unwrap_or_default();
                let disabled = col.button_disabled(&row);
                let action = button.action;
                let opportunity = row.opportunity.clone();
                view! {
                    <td class="row-action">
                        <button
                            title=button.title.clone()
                            disabled=disabled
                            on:click=move |_| board.dispatch(action, opportunity.clone())
                        >
                            {label}
                        </button>
                    </td>
                }
                .into_any()
            }
            None => {
                let text = col.cell_text(&row).unwrap_or_default();
                let numeric = col.kind == ColumnKind::Currency;
                view! {
                    <td class:wrap=col.wrap_text class:numeric=numeric>
                        {text}
                    </td>
                }
                .into_any()
            }
        })
        .collect_view();

    view! { <tr data-id=row.id().to_string()>{cells}</tr> }
}
