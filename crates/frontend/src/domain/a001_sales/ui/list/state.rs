use contracts::domain::a001_sales::SaleForm;
use leptos::prelude::*;

use crate::shared::list_page::ListPageState;

pub type SalesListState = ListPageState<SaleForm>;

pub fn create_state() -> RwSignal<SalesListState> {
    RwSignal::new(SalesListState::default())
}
