mod state;

use contracts::domain::a001_sales::{SaleForm, SaleRecord};
use contracts::domain::common::SubmitRequest;
use contracts::shared::coerce::{format_date, today};
use contracts::shared::list_filter::distinct_categories;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_sales::api;
use crate::domain::a001_sales::ui::details::SaleDetails;
use crate::shared::components::data_table::{CellContent, Column, DataTable};
use crate::shared::components::filter_panel::{FilterInputs, FilterPanel};
use crate::shared::icons::icon;
use crate::shared::list_page::{record_identity, LoadState};
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_money;
use state::create_state;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Absent prices render as zero rather than the placeholder.
fn money(value: Option<f64>) -> CellContent {
    CellContent::plain(format_money(value.unwrap_or(0.0)))
}

pub fn sales_columns() -> Vec<Column<SaleRecord>> {
    vec![
        Column::Field {
            key: "item_id",
            label: "Item ID",
            value: |s: &SaleRecord| text(&s.item_id),
        },
        Column::Field {
            key: "item_name",
            label: "Item Name",
            value: |s: &SaleRecord| text(&s.item_name),
        },
        Column::Field {
            key: "cust_name",
            label: "Customer Name",
            value: |s: &SaleRecord| text(&s.cust_name),
        },
        Column::Field {
            key: "mode",
            label: "Mode",
            value: |s: &SaleRecord| text(&s.mode),
        },
        Column::Computed {
            key: "selling_price",
            label: "Selling Price",
            render: |s: &SaleRecord, _| money(s.selling_price),
        },
        Column::Computed {
            key: "cost_price",
            label: "Cost Price",
            render: |s: &SaleRecord, _| money(s.cost_price),
        },
        Column::Computed {
            key: "margin",
            label: "Margin",
            render: |s: &SaleRecord, _| CellContent::plain(format_money(s.margin())),
        },
        Column::Field {
            key: "order_date",
            label: "Order Date",
            value: |s: &SaleRecord| s.order_date.map(format_date),
        },
        Column::Field {
            key: "expected_date",
            label: "Expected Date",
            value: |s: &SaleRecord| s.expected_date.map(format_date),
        },
        Column::Computed {
            key: "stitching",
            label: "Stitching",
            render: |s: &SaleRecord, _| {
                CellContent::plain(if s.stitching { "Yes" } else { "No" })
            },
        },
        Column::Field {
            key: "shipping",
            label: "Shipping",
            value: |s: &SaleRecord| text(&s.shipping),
        },
        Column::Field {
            key: "cust_address",
            label: "Customer Address",
            value: |s: &SaleRecord| text(&s.cust_address),
        },
        Column::Field {
            key: "additional_details",
            label: "Additional Details",
            value: |s: &SaleRecord| text(&s.additional_details),
        },
    ]
}

#[component]
pub fn SalesList() -> impl IntoView {
    let state = create_state();
    let notifier = use_notifier();
    let inputs = FilterInputs::new();

    let load_data = move || {
        state.update(|s| s.begin_fetch());
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(items) => {
                    log::debug!("loaded {} sales", items.len());
                    state.update(|s| s.fetch_succeeded(items, today()));
                }
                Err(e) => {
                    log::warn!("failed to load sales: {}", e);
                    notifier.error("Failed to load sales data");
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

    let save = move |form: SaleForm| {
        state.update(|s| s.form = form);
        let request = match state.with_untracked(|s| s.submit_request()) {
            Ok(request) => request,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        spawn_local(async move {
            let result = match &request {
                SubmitRequest::Create(dto) => api::create_sale(dto).await,
                SubmitRequest::Update { id, payload } => api::update_sale(id, payload).await,
            };
            match result {
                Ok(_) => {
                    let done = if request.is_update() {
                        "Sale updated successfully!"
                    } else {
                        "Sale added successfully!"
                    };
                    log::info!("{}", done);
                    notifier.success(done);
                    state.update(|s| s.submit_succeeded());
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to save sale: {}", e);
                    notifier.error(format!("Failed to save sale: {}", e));
                }
            }
        });
    };

    let remove = move |sale: SaleRecord| {
        let item_id = match record_identity(&sale) {
            Ok(id) => id,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match api::delete_sale(&item_id).await {
                Ok(_) => {
                    log::info!("deleted sale {}", item_id);
                    notifier.success("Sale deleted successfully!");
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to delete sale {}: {}", item_id, e);
                    notifier.error(format!("Failed to delete sale: {}", e));
                }
            }
        });
    };

    let close_form = move || state.update(|s| s.close_form());

    let rows = Memo::new(move |_| state.with(|s| s.filtered.clone()));
    let load = Memo::new(move |_| state.with(|s| s.load.clone()));
    let mode_options = Signal::derive(move || state.with(|s| distinct_categories(&s.items)));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_add(today()))
                    >
                        {icon("plus")}
                        " Add Sale"
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
                    category_label="Mode"
                    category_options=mode_options
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
                            columns=sales_columns()
                            rows=rows
                            on_edit=Callback::new(move |sale: SaleRecord| state.update(|s| s.open_edit(sale)))
                            on_delete=Callback::new(remove)
                        />
                    }.into_any(),
                }}
            </div>

            <Modal
                is_open=Signal::derive(move || state.with(|s| s.is_form_open()))
                title=Signal::derive(move || {
                    if state.with(|s| s.is_editing()) { "Edit Sale".to_string() } else { "Add Sale".to_string() }
                })
                on_close=Callback::new(move |_| close_form())
            >
                {move || {
                    let (initial, is_edit) = state.with_untracked(|s| (s.form.clone(), s.is_editing()));
                    view! {
                        <SaleDetails
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
