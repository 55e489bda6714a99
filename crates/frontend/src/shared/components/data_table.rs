//! Generic table driven by a list of column descriptors.

use leptos::ev;
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

pub const PLACEHOLDER: &str = "N/A";
pub const EMPTY_TEXT: &str = "No data available.";
pub const ACTIONS_KEY: &str = "actions";
pub const DELETE_CONFIRM_TEXT: &str = "Are you sure you want to delete this item?";

/// Text of a computed cell plus an optional CSS class.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellContent {
    pub text: String,
    pub class: Option<&'static str>,
}

impl CellContent {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }
}

pub enum Column<T> {
    /// Shows the accessor's value, or [`PLACEHOLDER`] when it is absent or empty.
    Field {
        key: &'static str,
        label: &'static str,
        value: fn(&T) -> Option<String>,
    },
    /// Output of `render(row, row_index)`.
    Computed {
        key: &'static str,
        label: &'static str,
        render: fn(&T, usize) -> CellContent,
    },
    /// Edit/delete menu.
    Actions,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        match self {
            Column::Field { key, label, value } => Column::Field {
                key: *key,
                label: *label,
                value: *value,
            },
            Column::Computed { key, label, render } => Column::Computed {
                key: *key,
                label: *label,
                render: *render,
            },
            Column::Actions => Column::Actions,
        }
    }
}

impl<T> Column<T> {
    pub fn key(&self) -> &'static str {
        match self {
            Column::Field { key, .. } | Column::Computed { key, .. } => *key,
            Column::Actions => ACTIONS_KEY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::Field { label, .. } | Column::Computed { label, .. } => *label,
            Column::Actions => "",
        }
    }

    /// Rendered cell, `None` for the actions column.
    pub fn content(&self, row: &T, index: usize) -> Option<CellContent> {
        match self {
            Column::Field { value, .. } => Some(CellContent::plain(field_text(value(row)))),
            Column::Computed { render, .. } => Some(render(row, index)),
            Column::Actions => None,
        }
    }
}

pub fn field_text(value: Option<String>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Appends an actions column when the table has row actions and the caller
/// did not place one already.
pub fn resolve_columns<T>(mut columns: Vec<Column<T>>, has_actions: bool) -> Vec<Column<T>> {
    if has_actions && !columns.iter().any(|c| c.key() == ACTIONS_KEY) {
        columns.push(Column::Actions);
    }
    columns
}

/// Which row's menu is open. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowMenu {
    open: Option<usize>,
}

impl RowMenu {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_row(&self) -> Option<usize> {
        self.open
    }
}

/// Runs `on_delete` only if `confirm` approves. Returns whether it ran.
pub fn confirm_delete(confirm: impl FnOnce() -> bool, on_delete: impl FnOnce()) -> bool {
    if !confirm() {
        return false;
    }
    on_delete();
    true
}

fn browser_confirm() -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(DELETE_CONFIRM_TEXT).ok())
        .unwrap_or(false)
}

fn click_inside_menu(event: &ev::MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".row-menu").ok().flatten())
        .is_some()
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(resolve_columns(
        columns,
        on_edit.is_some() || on_delete.is_some(),
    ));
    let menu = RwSignal::new(RowMenu::default());

    let outside_click = window_event_listener(ev::click, move |event| {
        if menu.with_untracked(|m| m.open_row().is_some()) && !click_inside_menu(&event) {
            menu.update(RowMenu::close);
        }
    });
    on_cleanup(move || outside_click.remove());

    // Row indices shift on refetch
    Effect::new(move |_| {
        rows.track();
        menu.set(RowMenu::default());
    });

    view! {
        {move || {
            let rows = rows.get();
            if rows.is_empty() {
                return view! { <div class="table-empty">{EMPTY_TEXT}</div> }.into_any();
            }
            let header = columns.with_value(|cols| {
                cols.iter()
                    .map(|col| {
                        let label = col.label();
                        view! { <TableHeaderCell>{label}</TableHeaderCell> }
                    })
                    .collect_view()
            });
            let body = rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|col| match col.content(&row, index) {
                                Some(content) => view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class=content.class.unwrap_or("")>{content.text}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                }
                                .into_any(),
                                None => actions_cell(row.clone(), index, menu, on_edit, on_delete),
                            })
                            .collect_view()
                    });
                    view! { <TableRow>{cells}</TableRow> }
                })
                .collect_view();

            view! {
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>{header}</TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>
                </div>
            }
            .into_any()
        }}
    }
}

fn actions_cell<T>(
    row: T,
    index: usize,
    menu: RwSignal<RowMenu>,
    on_edit: Option<Callback<T>>,
    on_delete: Option<Callback<T>>,
) -> AnyView
where
    T: Clone + Send + Sync + 'static,
{
    let row = StoredValue::new(row);

    view! {
        <TableCell>
            <div class="row-menu">
                <button
                    class="button button--icon row-menu__trigger"
                    aria-label="Row actions"
                    on:click=move |_| menu.update(|m| m.toggle(index))
                >
                    {icon("more")}
                </button>
                <Show when=move || menu.with(|m| m.is_open(index))>
                    <div class="row-menu__dropdown">
                        {on_edit.map(|on_edit| view! {
                            <button
                                class="row-menu__item"
                                on:click=move |_| {
                                    menu.update(RowMenu::close);
                                    on_edit.run(row.get_value());
                                }
                            >
                                "Edit"
                            </button>
                        })}
                        {on_delete.map(|on_delete| view! {
                            <button
                                class="row-menu__item row-menu__item--danger"
                                on:click=move |_| {
                                    menu.update(RowMenu::close);
                                    confirm_delete(browser_confirm, || on_delete.run(row.get_value()));
                                }
                            >
                                "Delete"
                            </button>
                        })}
                    </div>
                </Show>
            </div>
        </TableCell>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Row {
        name: Option<String>,
        amount: f64,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::Field {
                key: "name",
                label: "Name",
                value: |r: &Row| r.name.clone(),
            },
            Column::Computed {
                key: "amount",
                label: "Amount",
                render: |r: &Row, i| CellContent::plain(format!("{}:{}", i, r.amount)),
            },
        ]
    }

    #[test]
    fn absent_or_empty_fields_show_placeholder() {
        let cols = columns();
        let missing = Row { name: None, amount: 1.0 };
        let blank = Row { name: Some(String::new()), amount: 1.0 };
        let named = Row { name: Some("Bob".into()), amount: 2.5 };

        assert_eq!(cols[0].content(&missing, 0).unwrap().text, PLACEHOLDER);
        assert_eq!(cols[0].content(&blank, 0).unwrap().text, PLACEHOLDER);
        assert_eq!(cols[0].content(&named, 0).unwrap().text, "Bob");
        assert_eq!(cols[1].content(&named, 3).unwrap().text, "3:2.5");
    }

    #[test]
    fn actions_column_is_appended_once() {
        let resolved = resolve_columns(columns(), true);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[2].key(), ACTIONS_KEY);

        let again = resolve_columns(resolved, true);
        assert_eq!(again.iter().filter(|c| c.key() == ACTIONS_KEY).count(), 1);

        assert_eq!(resolve_columns(columns(), false).len(), 2);
    }

    #[test]
    fn caller_placed_actions_column_is_kept_in_place() {
        let mut cols = columns();
        cols.insert(0, Column::Actions);
        let resolved = resolve_columns(cols, true);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].key(), ACTIONS_KEY);
    }

    #[test]
    fn only_one_row_menu_is_open() {
        let mut menu = RowMenu::default();
        menu.toggle(1);
        assert!(menu.is_open(1));
        menu.toggle(4);
        assert!(!menu.is_open(1));
        assert!(menu.is_open(4));
        menu.toggle(4);
        assert_eq!(menu.open_row(), None);
        menu.toggle(2);
        menu.close();
        assert_eq!(menu.open_row(), None);
    }

    #[test]
    fn declined_confirmation_skips_delete() {
        let deleted = Cell::new(false);
        assert!(!confirm_delete(|| false, || deleted.set(true)));
        assert!(!deleted.get());

        assert!(confirm_delete(|| true, || deleted.set(true)));
        assert!(deleted.get());
    }
}
