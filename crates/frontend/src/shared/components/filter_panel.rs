use crate::shared::icons::icon;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use thaw::*;

/// Raw text of a list page's filter inputs, one signal per input.
#[derive(Clone, Copy)]
pub struct FilterInputs {
    pub search_name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl FilterInputs {
    pub fn new() -> Self {
        Self {
            search_name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
        }
    }

    /// Tracked read of every input.
    pub fn to_filter(&self) -> ListFilter {
        ListFilter {
            search_name: self.search_name.get(),
            category: self.category.get(),
            start_date: self.start_date.get(),
            end_date: self.end_date.get(),
        }
    }

    pub fn clear(&self) {
        self.search_name.set(String::new());
        self.category.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
    }
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// Search box, category select and order-date range above a list.
#[component]
pub fn FilterPanel(
    inputs: FilterInputs,
    /// Label of the category select ("Mode", "Status")
    category_label: &'static str,
    #[prop(into)] category_options: Signal<Vec<String>>,
    #[prop(into)] active_filters_count: Signal<usize>,
    /// "Showing N of M"
    #[prop(into)]
    counter: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <span class="filter-panel__counter">{move || counter.get()}</span>
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="filter-field" style="flex: 1; max-width: 320px;">
                        <label>"Customer"</label>
                        <Input value=inputs.search_name placeholder="Search by customer name..." />
                    </div>
                    <div class="filter-field">
                        <label>{category_label}</label>
                        <Select value=inputs.category>
                            <option value="">"All"</option>
                            {move || {
                                category_options
                                    .get()
                                    .into_iter()
                                    .map(|option| {
                                        let value = option.clone();
                                        view! { <option value=value>{option}</option> }
                                    })
                                    .collect_view()
                            }}
                        </Select>
                    </div>
                    <div class="filter-field">
                        <label>"From"</label>
                        <input
                            type="date"
                            class="date-input"
                            prop:value=move || inputs.start_date.get()
                            on:input=move |ev| inputs.start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="filter-field">
                        <label>"To"</label>
                        <input
                            type="date"
                            class="date-input"
                            prop:value=move || inputs.end_date.get()
                            on:input=move |ev| inputs.end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| inputs.clear()>
                        "Clear Filters"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
