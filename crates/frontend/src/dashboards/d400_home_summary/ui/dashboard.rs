use contracts::dashboards::d400_home_summary::{PendingOrders, SummaryMetrics};
use contracts::domain::a001_sales::SaleRecord;
use contracts::domain::a002_stitching::StitchingOrder;
use contracts::shared::coerce::{format_date, today};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_home_summary::api;
use crate::domain::a002_stitching::ui::list::status_class;
use crate::shared::components::data_table::{CellContent, Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::number_format::{format_count, format_money};

fn stitching_columns() -> Vec<Column<StitchingOrder>> {
    vec![
        Column::Field {
            key: "stitching_id",
            label: "Stitching ID",
            value: |o: &StitchingOrder| o.stitching_id.clone(),
        },
        Column::Field {
            key: "cust_name",
            label: "Customer Name",
            value: |o: &StitchingOrder| Some(o.cust_name.clone()),
        },
        Column::Field {
            key: "item_name",
            label: "Item Name",
            value: |o: &StitchingOrder| Some(o.item_name.clone()),
        },
        Column::Field {
            key: "expected_date",
            label: "Expected Date",
            value: |o: &StitchingOrder| o.expected_date.map(format_date),
        },
        Column::Computed {
            key: "status",
            label: "Status",
            render: |o: &StitchingOrder, _| {
                CellContent::styled(o.status.label(), status_class(o.status))
            },
        },
    ]
}

fn sales_columns() -> Vec<Column<SaleRecord>> {
    vec![
        Column::Field {
            key: "item_id",
            label: "Item ID",
            value: |s: &SaleRecord| Some(s.item_id.clone()),
        },
        Column::Field {
            key: "cust_name",
            label: "Customer Name",
            value: |s: &SaleRecord| Some(s.cust_name.clone()),
        },
        Column::Field {
            key: "item_name",
            label: "Item Name",
            value: |s: &SaleRecord| Some(s.item_name.clone()),
        },
        Column::Field {
            key: "expected_date",
            label: "Expected Date",
            value: |s: &SaleRecord| s.expected_date.map(format_date),
        },
    ]
}

/// Headline figures plus open orders, overdue first, then those still within
/// their expected date.
///
/// The two requests are independent: one failing leaves the other's section intact.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<SummaryMetrics>);
    let (summary_error, set_summary_error) = signal(None::<String>);
    let (pending, set_pending) = signal(None::<PendingOrders>);
    let (pending_error, set_pending_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_summary().await {
                Ok(metrics) => set_summary.set(Some(metrics)),
                Err(e) => {
                    log::warn!("failed to load summary metrics: {}", e);
                    set_summary_error.set(Some(e.to_string()));
                }
            }
        });
        spawn_local(async move {
            match api::get_pending_orders().await {
                Ok(mut orders) => {
                    orders.prepare(today());
                    set_pending.set(Some(orders));
                }
                Err(e) => {
                    log::warn!("failed to load pending orders: {}", e);
                    set_pending_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let metric = move |pick: fn(&SummaryMetrics) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(pick)))
    };

    let stitching = move |pick: fn(&PendingOrders) -> &Vec<StitchingOrder>| {
        Signal::derive(move || pending.with(|p| p.as_ref().map(|p| pick(p).clone()).unwrap_or_default()))
    };
    let sales = move |pick: fn(&PendingOrders) -> &Vec<SaleRecord>| {
        Signal::derive(move || pending.with(|p| p.as_ref().map(|p| pick(p).clone()).unwrap_or_default()))
    };

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || summary_error.get().map(|e| view! {
                    <div class="alert alert--error">{format!("Failed to load summary: {}", e)}</div>
                })}
                <div class="stat-cards">
                    <StatCard
                        label="Total Sales"
                        icon_name="sales"
                        value=metric(|m| format_count(m.total_sales))
                    />
                    <StatCard
                        label="Stitching Orders"
                        icon_name="stitching"
                        value=metric(|m| format_count(m.total_stitching_orders))
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="billing"
                        value=metric(|m| format_money(m.total_revenue.unwrap_or(0.0)))
                    />
                    <StatCard
                        label="Orders In Progress"
                        icon_name="refresh"
                        value=Signal::derive(move || {
                            pending.with(|p| p.as_ref().map(|p| format_count(p.in_progress_count() as u64)))
                        })
                        subtitle=Signal::derive(move || {
                            pending.with(|p| p.as_ref().map(|p| format!("{} overdue", p.overdue_count())))
                        })
                    />
                </div>

                {move || pending_error.get().map(|e| view! {
                    <div class="alert alert--error">{format!("Failed to load pending orders: {}", e)}</div>
                })}
                {move || {
                    if pending.with(Option::is_none) && pending_error.with(Option::is_none) {
                        Some(view! { <div class="page__loading"><Spinner /></div> })
                    } else {
                        None
                    }
                }}
                <section class="dashboard__section">
                    <h2>"Overdue Stitching Orders"</h2>
                    <DataTable columns=stitching_columns() rows=stitching(|p| &p.pending_stitching) />
                </section>
                <section class="dashboard__section">
                    <h2>"Overdue Sales"</h2>
                    <DataTable columns=sales_columns() rows=sales(|p| &p.pending_sales) />
                </section>
                <section class="dashboard__section">
                    <h2>"Stitching Orders In Progress"</h2>
                    <DataTable columns=stitching_columns() rows=stitching(|p| &p.working_stitching) />
                </section>
                <section class="dashboard__section">
                    <h2>"Sales In Progress"</h2>
                    <DataTable columns=sales_columns() rows=sales(|p| &p.working_sales) />
                </section>
            </div>
        </div>
    }
}
