use contracts::domain::a002_stitching::StitchingForm;
use leptos::prelude::*;

use crate::shared::list_page::ListPageState;

pub type StitchingListState = ListPageState<StitchingForm>;

pub fn create_state() -> RwSignal<StitchingListState> {
    RwSignal::new(StitchingListState::default())
}
