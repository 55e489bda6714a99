//! State shared by the Sales and Stitching list pages.
//!
//! Everything here is synchronous; the page components drive it from their
//! fetch and submit futures.

use chrono::NaiveDate;
use contracts::domain::common::{EntityForm, ListEntity, SubmitRequest};
use contracts::shared::error::AppError;
use contracts::shared::list_filter::{sort_newest_first, ListFilter};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormMode<R> {
    Closed,
    Add,
    /// Holds the record as fetched; its identity keys the update.
    Edit(R),
}

pub struct ListPageState<F: EntityForm> {
    pub load: LoadState,
    /// Last fetched collection, derived and sorted. Never edited locally.
    pub items: Vec<F::Record>,
    pub filtered: Vec<F::Record>,
    pub filter: ListFilter,
    pub mode: FormMode<F::Record>,
    pub form: F,
}

impl<F: EntityForm> Default for ListPageState<F> {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            items: Vec::new(),
            filtered: Vec::new(),
            filter: ListFilter::default(),
            mode: FormMode::Closed,
            form: F::default(),
        }
    }
}

impl<F: EntityForm> ListPageState<F> {
    pub fn begin_fetch(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn fetch_succeeded(&mut self, mut records: Vec<F::Record>, today: NaiveDate) {
        for record in records.iter_mut() {
            record.derive(today);
        }
        sort_newest_first(&mut records);
        self.items = records;
        self.refilter();
        self.load = LoadState::Ready;
    }

    pub fn fetch_failed(&mut self, error: &AppError) {
        self.load = LoadState::Error(error.to_string());
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.items);
    }

    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = filter;
        self.refilter();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    /// "Showing N of M".
    pub fn counter_text(&self) -> String {
        format!("Showing {} of {}", self.filtered.len(), self.items.len())
    }

    pub fn open_add(&mut self, today: NaiveDate) {
        self.form = F::blank(today);
        self.mode = FormMode::Add;
    }

    pub fn open_edit(&mut self, record: F::Record) {
        self.form = F::from_record(&record);
        self.mode = FormMode::Edit(record);
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Closed;
        self.form = F::default();
    }

    pub fn is_form_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Request for the current form, or the reason nothing may be sent.
    pub fn submit_request(&self) -> Result<SubmitRequest<F::Payload>, AppError> {
        let payload = self.form.to_payload()?;
        match &self.mode {
            FormMode::Edit(record) => Ok(SubmitRequest::Update {
                id: record_identity(record)?,
                payload,
            }),
            _ => Ok(SubmitRequest::Create(payload)),
        }
    }

    pub fn submit_succeeded(&mut self) {
        self.close_form();
    }
}

/// Identity used in `PUT`/`DELETE` paths.
pub fn record_identity<R: ListEntity>(record: &R) -> Result<String, AppError> {
    record
        .identity()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("This record has no identifier.".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales::{SaleForm, SaleRecord};
    use contracts::domain::a002_stitching::{OrderStatus, StitchingForm, StitchingOrder};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sales() -> Vec<SaleRecord> {
        serde_json::from_str(
            r#"[
                {"item_id": "B", "item_name": "Dupatta", "cust_name": "Alice",
                 "selling_price": 100, "cost_price": 100, "mode": "Cash",
                 "order_date": "2024-01-01"},
                {"item_id": "A", "item_name": "Saree", "cust_name": "Bob Singh",
                 "selling_price": 100, "cost_price": 60, "mode": "UPI",
                 "order_date": "2024-03-15"},
                {"item_id": "C", "item_name": "Kurta", "cust_name": "bobby",
                 "mode": "Cash", "order_date": "2024-02-10"}
            ]"#,
        )
        .unwrap()
    }

    fn ready_sales() -> ListPageState<SaleForm> {
        let mut state = ListPageState::<SaleForm>::default();
        state.fetch_succeeded(sales(), day(2024, 4, 1));
        state
    }

    #[test]
    fn fetch_sorts_newest_first() {
        let state = ready_sales();
        assert_eq!(state.load, LoadState::Ready);
        let ids: Vec<_> = state.items.iter().map(|s| s.item_id.as_str()).collect();
        assert_eq!(ids, ["A", "C", "B"]);
        assert!(state
            .items
            .windows(2)
            .all(|w| w[0].order_date >= w[1].order_date));
        assert_eq!(state.items[0].margin(), 40.0);
        assert_eq!(state.items[2].margin(), 0.0);
        assert_eq!(state.filtered, state.items);
    }

    #[test]
    fn search_is_case_insensitive_and_clearable() {
        let mut state = ready_sales();
        state.set_filter(ListFilter {
            search_name: "bob".into(),
            ..ListFilter::default()
        });
        let names: Vec<_> = state.filtered.iter().map(|s| s.cust_name.as_str()).collect();
        assert_eq!(names, ["Bob Singh", "bobby"]);
        assert_eq!(state.counter_text(), "Showing 2 of 3");
        assert_eq!(state.items.len(), 3);

        state.clear_filter();
        assert_eq!(state.filtered, state.items);
        assert!(state.filter.is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let mut state = ready_sales();
        state.set_filter(ListFilter {
            search_name: "bob".into(),
            category: "Cash".into(),
            start_date: "2024-02-01".into(),
            end_date: "2024-02-10".into(),
        });
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].item_id, "C");
    }

    #[test]
    fn refetch_reapplies_the_active_filter() {
        let mut state = ready_sales();
        state.set_filter(ListFilter {
            category: "UPI".into(),
            ..ListFilter::default()
        });
        state.begin_fetch();
        assert!(state.is_loading());
        state.fetch_succeeded(sales(), day(2024, 4, 1));
        assert_eq!(state.filtered.len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_the_last_collection() {
        let mut state = ready_sales();
        state.begin_fetch();
        state.fetch_failed(&AppError::Fetch("Failed to load sales data".into()));
        assert_eq!(state.error(), Some("Failed to load sales data"));
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn records_without_identity_cannot_be_targeted() {
        let blank: SaleRecord =
            serde_json::from_str(r#"{"item_id": "", "order_date": "2024-01-01"}"#).unwrap();
        let err = record_identity(&blank).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "This record has no identifier.");
        assert_eq!(record_identity(&sales()[0]).unwrap(), "B");
    }

    #[test]
    fn failed_refetch_shows_the_error_instead_of_the_table() {
        let mut state = ready_sales();
        assert_eq!(state.load, LoadState::Ready);

        state.begin_fetch();
        state.fetch_failed(&AppError::Fetch("Failed to load sales data".into()));
        assert_eq!(
            state.load,
            LoadState::Error("Failed to load sales data".into())
        );
        assert!(!state.is_loading());

        state.begin_fetch();
        state.fetch_succeeded(sales(), day(2024, 4, 1));
        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn add_creates_and_edit_updates_by_edited_identity() {
        let mut state = ready_sales();
        state.open_add(day(2024, 4, 1));
        assert_eq!(state.form.order_date, "2024-04-01");
        assert!(!state.submit_request().unwrap().is_update());

        let record = state.items[0].clone();
        state.open_edit(record);
        state.form.item_id = "A-renamed".into();
        match state.submit_request().unwrap() {
            SubmitRequest::Update { id, payload } => {
                assert_eq!(id, "A");
                assert_eq!(payload.item_id.as_deref(), Some("A-renamed"));
            }
            other => panic!("expected update, got {:?}", other),
        }

        state.submit_succeeded();
        assert!(!state.is_form_open());
        assert_eq!(state.form, SaleForm::default());
    }

    fn stitching_state(today: NaiveDate) -> ListPageState<StitchingForm> {
        let orders: Vec<StitchingOrder> = serde_json::from_str(
            r#"[
                {"stitching_id": 1, "item_name": "Blouse", "cust_name": "Carol",
                 "order_date": "2024-03-01", "expected_date": "2024-03-31"},
                {"stitching_id": 2, "item_name": "Kurta", "cust_name": "Dev",
                 "order_date": "2024-03-05", "expected_date": "2024-04-01"},
                {"stitching_id": 3, "item_name": "Shirt", "cust_name": "Esha",
                 "order_date": "2024-02-01"}
            ]"#,
        )
        .unwrap();
        let mut state = ListPageState::<StitchingForm>::default();
        state.fetch_succeeded(orders, today);
        state
    }

    #[test]
    fn stitching_status_is_derived_on_fetch() {
        let state = stitching_state(day(2024, 4, 1));
        let statuses: Vec<_> = state
            .items
            .iter()
            .map(|o| (o.stitching_id.as_deref().unwrap_or(""), o.status))
            .collect();
        assert_eq!(
            statuses,
            [
                ("2", OrderStatus::InProgress),
                ("1", OrderStatus::Expired),
                ("3", OrderStatus::InProgress),
            ]
        );
    }

    #[test]
    fn status_filter_matches_derived_label() {
        let mut state = stitching_state(day(2024, 4, 1));
        state.set_filter(ListFilter {
            category: OrderStatus::Expired.label().into(),
            ..ListFilter::default()
        });
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].cust_name, "Carol");
    }

    #[test]
    fn blank_customer_name_is_rejected_before_sending() {
        let mut state = stitching_state(day(2024, 4, 1));
        state.open_add(day(2024, 4, 1));
        state.form.item_name = "Lehenga".into();
        let err = state.submit_request().unwrap_err();
        assert!(err.is_validation());
        assert!(state.is_form_open());
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn stitching_update_is_keyed_by_stitching_id() {
        let mut state = stitching_state(day(2024, 4, 1));
        let record = state.items[1].clone();
        state.open_edit(record);
        assert!(state.is_editing());
        let request = state.submit_request().unwrap();
        assert_eq!(
            request,
            SubmitRequest::Update {
                id: "1".into(),
                payload: state.form.to_payload().unwrap(),
            }
        );
    }
}
