mod state;

use contracts::domain::a002_stitching::{OrderStatus, StitchingForm, StitchingOrder};
use contracts::domain::common::SubmitRequest;
use contracts::shared::coerce::{format_date, today};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_stitching::api;
use crate::domain::a002_stitching::ui::details::StitchingDetails;
use crate::shared::components::data_table::{CellContent, Column, DataTable};
use crate::shared::components::filter_panel::{FilterInputs, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::list_page::{record_identity, LoadState};
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_money;
use state::create_state;

pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Expired => "status status--expired",
        OrderStatus::InProgress => "status status--in-progress",
    }
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Absent prices render as zero rather than the placeholder.
fn money(value: Option<f64>) -> CellContent {
    CellContent::plain(format_money(value.unwrap_or(0.0)))
}

pub fn stitching_columns() -> Vec<Column<StitchingOrder>> {
    vec![
        Column::Field {
            key: "stitching_id",
            label: "Stitching ID",
            value: |o: &StitchingOrder| o.stitching_id.clone(),
        },
        Column::Field {
            key: "item_id",
            label: "Item ID",
            value: |o: &StitchingOrder| o.item_id.clone(),
        },
        Column::Field {
            key: "item_name",
            label: "Item Name",
            value: |o: &StitchingOrder| text(&o.item_name),
        },
        Column::Field {
            key: "cust_name",
            label: "Customer Name",
            value: |o: &StitchingOrder| text(&o.cust_name),
        },
        Column::Computed {
            key: "tailor_price",
            label: "Tailor Price",
            render: |o: &StitchingOrder, _| money(o.tailor_price),
        },
        Column::Computed {
            key: "selling_price",
            label: "Selling Price",
            render: |o: &StitchingOrder, _| money(o.selling_price),
        },
        Column::Computed {
            key: "margin",
            label: "Margin",
            render: |o: &StitchingOrder, _| CellContent::plain(format_money(o.margin())),
        },
        Column::Computed {
            key: "status",
            label: "Status",
            render: |o: &StitchingOrder, _| {
                CellContent::styled(o.status.label(), status_class(o.status))
            },
        },
        Column::Field {
            key: "order_date",
            label: "Order Date",
            value: |o: &StitchingOrder| o.order_date.map(format_date),
        },
        Column::Field {
            key: "expected_date",
            label: "Expected Date",
            value: |o: &StitchingOrder| o.expected_date.map(format_date),
        },
        Column::Field {
            key: "stitching_preference",
            label: "Stitching Preference",
            value: |o: &StitchingOrder| text(&o.stitching_preference),
        },
        Column::Field {
            key: "additional_details",
            label: "Additional Details",
            value: |o: &StitchingOrder| text(&o.additional_details),
        },
    ]
}

#[component]
pub fn StitchingList() -> impl IntoView {
    let state = create_state();
    let notifier = use_notifier();
    let inputs = FilterInputs::new();

    let load_data = move || {
        state.update(|s| s.begin_fetch());
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(items) => {
                    log::debug!("loaded {} stitching orders", items.len());
                    state.update(|s| s.fetch_succeeded(items, today()));
                }
                Err(e) => {
                    log::warn!("failed to load stitching orders: {}", e);
                    notifier.error("Failed to load stitching data");
                    state.update(|s| s.fetch_failed(&e));
                }
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    Effect::new(move |_| {
        let filter = inputs.to_filter();
        state.update(|s| s.set_filter(filter));
    });

    let save = move |form: StitchingForm| {
        state.update(|s| s.form = form);
        let request = match state.with_untracked(|s| s.submit_request()) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("stitching form rejected: {}", e);
                notifier.error(e.to_string());
                return;
            }
        };
        spawn_local(async move {
            let result = match &request {
                SubmitRequest::Create(dto) => api::create_order(dto).await,
                SubmitRequest::Update { id, payload } => api::update_order(id, payload).await,
            };
            match result {
                Ok(_) => {
                    let done = if request.is_update() {
                        "Stitching order updated successfully!"
                    } else {
                        "Stitching order added successfully!"
                    };
                    log::info!("{}", done);
                    notifier.success(done);
                    state.update(|s| s.submit_succeeded());
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to save stitching order: {}", e);
                    notifier.error(format!("Failed to save stitching order: {}", e));
                }
            }
        });
    };

    let remove = move |order: StitchingOrder| {
        let stitching_id = match record_identity(&order) {
            Ok(id) => id,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match api::delete_order(&stitching_id).await {
                Ok(_) => {
                    log::info!("deleted stitching order {}", stitching_id);
                    notifier.success("Stitching order deleted successfully!");
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to delete stitching order {}: {}", stitching_id, e);
                    notifier.error(format!("Failed to delete stitching order: {}", e));
                }
            }
        });
    };

    let close_form = move || state.update(|s| s.close_form());

    let rows = Memo::new(move |_| state.with(|s| s.filtered.clone()));
    let load = Memo::new(move |_| state.with(|s| s.load.clone()));
    let status_options = Signal::derive(|| {
        OrderStatus::ALL
            .iter()
            .map(|status| status.label().to_string())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stitching Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_add(today()))
                    >
                        {icon("plus")}
                        " Add Order"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || load.get() == LoadState::Loading)
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    inputs=inputs
                    category_label="Status"
                    category_options=status_options
                    active_filters_count=Signal::derive(move || state.with(|s| s.filter.active_count()))
                    counter=Signal::derive(move || state.with(|s| s.counter_text()))
                />

                {move || match load.get() {
                    LoadState::Loading => {
                        view! { <div class="page__loading"><Spinner /></div> }.into_any()
                    }
                    LoadState::Error(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                    LoadState::Ready => view! {
                        <DataTable
                            columns=stitching_columns()
                            rows=rows
                            on_edit=Callback::new(move |order: StitchingOrder| state.update(|s| s.open_edit(order)))
                            on_delete=Callback::new(remove)
                        />
                    }.into_any(),
                }}
            </div>

            <Modal
                is_open=Signal::derive(move || state.with(|s| s.is_form_open()))
                title=Signal::derive(move || {
                    if state.with(|s| s.is_editing()) {
                        "Edit Stitching Order".to_string()
                    } else {
                        "Add Stitching Order".to_string()
                    }
                })
                on_close=Callback::new(move |_| close_form())
            >
                {move || {
                    let (initial, is_edit) = state.with_untracked(|s| (s.form.clone(), s.is_editing()));
                    view! {
                        <StitchingDetails
                            initial=initial
                            is_edit=is_edit
                            on_save=Callback::new(save)
                            on_cancel=Callback::new(move |_| close_form())
                        />
                    }
                }}
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::common::ListEntity;

    fn order(expected: &str) -> StitchingOrder {
        let mut order: StitchingOrder = serde_json::from_value(serde_json::json!({
            "stitching_id": 9,
            "item_name": "Blouse",
            "cust_name": "Carol",
            "tailor_price": 300,
            "order_date": "2024-05-01",
            "expected_date": expected,
        }))
        .unwrap();
        order.derive(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        order
    }

    fn cell(key: &str, row: &StitchingOrder) -> CellContent {
        stitching_columns()
            .iter()
            .find(|c| c.key() == key)
            .and_then(|c| c.content(row, 0))
            .unwrap()
    }

    #[test]
    fn status_cell_carries_its_class() {
        let expired = cell("status", &order("2024-05-09"));
        assert_eq!(expired.text, "Expired");
        assert_eq!(expired.class, Some("status status--expired"));

        let open = cell("status", &order("2024-05-10"));
        assert_eq!(open.text, "In Progress");
        assert_eq!(open.class, Some("status status--in-progress"));
    }

    #[test]
    fn absent_selling_price_counts_as_zero_in_margin() {
        let row = order("2024-06-01");
        assert_eq!(cell("selling_price", &row).text, "₹0.00");
        assert_eq!(cell("tailor_price", &row).text, "₹300.00");
        assert_eq!(cell("margin", &row).text, "-₹300.00");
        assert_eq!(cell("item_id", &row).text, "N/A");
    }
}
