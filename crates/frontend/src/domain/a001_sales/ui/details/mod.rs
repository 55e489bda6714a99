use contracts::domain::a001_sales::SaleForm;
use leptos::prelude::*;
use thaw::*;

/// Add/edit form for a sale. Owns its inputs; `on_save` receives the typed text.
#[component]
pub fn SaleDetails(
    initial: SaleForm,
    /// Edit mode labels the save button "Update"
    is_edit: bool,
    on_save: Callback<SaleForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let item_id = RwSignal::new(initial.item_id);
    let item_name = RwSignal::new(initial.item_name);
    let selling_price = RwSignal::new(initial.selling_price);
    let cost_price = RwSignal::new(initial.cost_price);
    let mode = RwSignal::new(initial.mode);
    let cust_name = RwSignal::new(initial.cust_name);
    let order_date = RwSignal::new(initial.order_date);
    let stitching = RwSignal::new(initial.stitching);
    let expected_date = RwSignal::new(initial.expected_date);
    let shipping = RwSignal::new(initial.shipping);
    let cust_address = RwSignal::new(initial.cust_address);
    let additional_details = RwSignal::new(initial.additional_details);

    let collect = move || SaleForm {
        item_id: item_id.get_untracked(),
        item_name: item_name.get_untracked(),
        selling_price: selling_price.get_untracked(),
        cost_price: cost_price.get_untracked(),
        mode: mode.get_untracked(),
        cust_name: cust_name.get_untracked(),
        order_date: order_date.get_untracked(),
        stitching: stitching.get_untracked(),
        expected_date: expected_date.get_untracked(),
        shipping: shipping.get_untracked(),
        cust_address: cust_address.get_untracked(),
        additional_details: additional_details.get_untracked(),
    };

    view! {
        <div class="details-form">
            <div class="form-grid">
                <div class="form-group">
                    <label>"Item ID"</label>
                    <Input value=item_id placeholder="e.g. S-1024" />
                </div>
                <div class="form-group">
                    <label>"Item Name"</label>
                    <Input value=item_name />
                </div>
                <div class="form-group">
                    <label>"Customer Name"</label>
                    <Input value=cust_name />
                </div>
                <div class="form-group">
                    <label>"Mode"</label>
                    <Input value=mode placeholder="Cash, UPI, Card..." />
                </div>
                <div class="form-group">
                    <label>"Selling Price (₹)"</label>
                    <Input value=selling_price input_type=InputType::Number />
                </div>
                <div class="form-group">
                    <label>"Cost Price (₹)"</label>
                    <Input value=cost_price input_type=InputType::Number />
                </div>
                <div class="form-group">
                    <label>"Order Date"</label>
                    <input
                        type="date"
                        class="date-input"
                        prop:value=move || order_date.get()
                        on:input=move |ev| order_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Expected Date"</label>
                    <input
                        type="date"
                        class="date-input"
                        prop:value=move || expected_date.get()
                        on:input=move |ev| expected_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Shipping"</label>
                    <Input value=shipping />
                </div>
                <div class="form-group">
                    <label>"Customer Address"</label>
                    <Input value=cust_address />
                </div>
                <div class="form-group form-group--wide">
                    <Checkbox checked=stitching label="Stitching required" />
                </div>
                <div class="form-group form-group--wide">
                    <label>"Additional Details"</label>
                    <Textarea value=additional_details attr:rows=3 />
                </div>
            </div>

            <div class="form-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(collect())>
                    {if is_edit { "Update" } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}
