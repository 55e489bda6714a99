use contracts::domain::a003_billing::{sort_bills_newest_first, Bill, CreateBillRequest};
use contracts::shared::coerce::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_billing::api;
use crate::shared::components::data_table::{CellContent, Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::list_page::LoadState;
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_money;

pub fn billing_columns() -> Vec<Column<Bill>> {
    vec![
        Column::Field {
            key: "bill_id",
            label: "Bill ID",
            value: |b: &Bill| Some(b.bill_id.clone()),
        },
        Column::Field {
            key: "item_id",
            label: "Item ID",
            value: |b: &Bill| b.item_id.clone(),
        },
        Column::Field {
            key: "stitching_id",
            label: "Stitching ID",
            value: |b: &Bill| b.stitching_id.clone(),
        },
        Column::Computed {
            key: "total_amount",
            label: "Total",
            render: |b: &Bill, _| CellContent::plain(format_money(b.total())),
        },
        Column::Field {
            key: "bill_date",
            label: "Bill Date",
            value: |b: &Bill| b.bill_date.map(format_date),
        },
    ]
}

#[component]
pub fn BillingList() -> impl IntoView {
    let notifier = use_notifier();
    let bills: RwSignal<Vec<Bill>> = RwSignal::new(Vec::new());
    let load = RwSignal::new(LoadState::Loading);
    let show_create = RwSignal::new(false);
    let item_id = RwSignal::new(String::new());
    let (creating, set_creating) = signal(false);

    let load_data = move || {
        load.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_bills().await {
                Ok(mut data) => {
                    sort_bills_newest_first(&mut data);
                    bills.set(data);
                    load.set(LoadState::Ready);
                }
                Err(e) => {
                    log::warn!("failed to load bills: {}", e);
                    notifier.error("Failed to load billing data");
                    load.set(LoadState::Error(e.to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let close_create = move || {
        show_create.set(false);
        item_id.set(String::new());
    };

    let create = move || {
        let request = match CreateBillRequest::new(&item_id.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        set_creating.set(true);
        spawn_local(async move {
            match api::create_bill(&request).await {
                Ok(details) => {
                    let total = format_money(details.total_amount.unwrap_or(0.0));
                    log::info!("bill created for item {}: {}", request.item_id, total);
                    notifier.success(format!("Bill created successfully! Total: {}", total));
                    close_create();
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to create bill: {}", e);
                    notifier.error(format!("Failed to create bill: {}", e));
                }
            }
            set_creating.set(false);
        });
    };

    let remove = move |bill: Bill| {
        spawn_local(async move {
            match api::delete_bill(&bill.bill_id).await {
                Ok(_) => {
                    log::info!("deleted bill {}", bill.bill_id);
                    notifier.success("Bill deleted successfully!");
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to delete bill {}: {}", bill.bill_id, e);
                    notifier.error(format!("Failed to delete bill: {}", e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Billing"</h1>
                    <Badge>{move || bills.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                        {icon("plus")}
                        " Create Bill"
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
                {move || match load.get() {
                    LoadState::Loading => {
                        view! { <div class="page__loading"><Spinner /></div> }.into_any()
                    }
                    LoadState::Error(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                    LoadState::Ready => view! {
                        <DataTable
                            columns=billing_columns()
                            rows=bills
                            on_delete=Callback::new(remove)
                        />
                    }.into_any(),
                }}
            </div>

            <Modal
                is_open=show_create
                title=Signal::derive(|| "Create Bill".to_string())
                on_close=Callback::new(move |_| close_create())
            >
                <div class="details-form">
                    <div class="form-group">
                        <label>"Item ID" <span class="required">"*"</span></label>
                        <Input value=item_id placeholder="Item ID of the sale or stitching order" />
                    </div>
                    <div class="form-actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_create()>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| create()
                            disabled=Signal::derive(move || creating.get())
                        >
                            "Create"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}
