use contracts::domain::a002_stitching::StitchingForm;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StitchingDetails(
    initial: StitchingForm,
    is_edit: bool,
    on_save: Callback<StitchingForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Assigned by the server, shown but never sent back
    let stitching_id = initial.stitching_id.clone();

    let item_id = RwSignal::new(initial.item_id);
    let item_name = RwSignal::new(initial.item_name);
    let cust_name = RwSignal::new(initial.cust_name);
    let stitching_preference = RwSignal::new(initial.stitching_preference);
    let tailor_price = RwSignal::new(initial.tailor_price);
    let selling_price = RwSignal::new(initial.selling_price);
    let order_date = RwSignal::new(initial.order_date);
    let expected_date = RwSignal::new(initial.expected_date);
    let additional_details = RwSignal::new(initial.additional_details);

    let collect = {
        let stitching_id = stitching_id.clone();
        move || StitchingForm {
            stitching_id: stitching_id.clone(),
            item_id: item_id.get_untracked(),
            item_name: item_name.get_untracked(),
            cust_name: cust_name.get_untracked(),
            stitching_preference: stitching_preference.get_untracked(),
            tailor_price: tailor_price.get_untracked(),
            selling_price: selling_price.get_untracked(),
            order_date: order_date.get_untracked(),
            expected_date: expected_date.get_untracked(),
            additional_details: additional_details.get_untracked(),
        }
    };

    view! {
        <div class="details-form">
            <div class="form-grid">
                {is_edit.then(|| view! {
                    <div class="form-group">
                        <label>"Stitching ID"</label>
                        <input type="text" class="readonly-input" value=stitching_id readonly=true />
                    </div>
                })}
                <div class="form-group">
                    <label>"Item ID"</label>
                    <Input value=item_id placeholder="Linked sale, optional" />
                </div>
                <div class="form-group">
                    <label>"Item Name" <span class="required">"*"</span></label>
                    <Input value=item_name />
                </div>
                <div class="form-group">
                    <label>"Customer Name" <span class="required">"*"</span></label>
                    <Input value=cust_name />
                </div>
                <div class="form-group">
                    <label>"Stitching Preference"</label>
                    <Input value=stitching_preference />
                </div>
                <div class="form-group">
                    <label>"Tailor Price (₹)"</label>
                    <Input value=tailor_price input_type=InputType::Number />
                </div>
                <div class="form-group">
                    <label>"Selling Price (₹)"</label>
                    <Input value=selling_price input_type=InputType::Number />
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
