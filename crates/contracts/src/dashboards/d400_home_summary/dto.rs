use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_sales::SaleRecord;
use crate::domain::a002_stitching::StitchingOrder;
use crate::domain::common::ListEntity;
use crate::shared::list_filter::sort_newest_first;
use crate::shared::serde_helpers::{amount_opt, null_as_default};

pub const HOME_SUMMARY_API_PATH: &str = "/api/home/summary";
pub const HOME_PENDING_API_PATH: &str = "/api/home/pending-orders";

/// Headline numbers for the home dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sales: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_stitching_orders: u64,
    /// Sales plus stitching selling prices.
    #[serde(default, deserialize_with = "amount_opt")]
    pub total_revenue: Option<f64>,
}

/// Orders split by whether their expected date has passed.
///
/// `pending_*` are overdue, `working_*` are still within their expected date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingOrders {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_sales: Vec<SaleRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub working_sales: Vec<SaleRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_stitching: Vec<StitchingOrder>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub working_stitching: Vec<StitchingOrder>,
}

impl PendingOrders {
    /// Derive stitching statuses and order every list newest first.
    pub fn prepare(&mut self, today: NaiveDate) {
        for order in self
            .pending_stitching
            .iter_mut()
            .chain(self.working_stitching.iter_mut())
        {
            order.derive(today);
        }
        sort_newest_first(&mut self.pending_sales);
        sort_newest_first(&mut self.working_sales);
        sort_newest_first(&mut self.pending_stitching);
        sort_newest_first(&mut self.working_stitching);
    }

    pub fn overdue_count(&self) -> usize {
        self.pending_sales.len() + self.pending_stitching.len()
    }

    pub fn in_progress_count(&self) -> usize {
        self.working_sales.len() + self.working_stitching.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tolerates_nulls() {
        let metrics: SummaryMetrics =
            serde_json::from_str(r#"{"total_sales": 4, "total_stitching_orders": null}"#).unwrap();
        assert_eq!(metrics.total_sales, 4);
        assert_eq!(metrics.total_stitching_orders, 0);
        assert_eq!(metrics.total_revenue, None);
    }

    #[test]
    fn prepare_marks_overdue_stitching_as_expired() {
        let mut pending: PendingOrders = serde_json::from_str(
            r#"{"pending_stitching": [
                    {"stitching_id": 1, "order_date": "2024-01-01", "expected_date": "2024-01-05"},
                    {"stitching_id": 2, "order_date": "2024-02-01", "expected_date": "2024-02-05"}
                ],
                "pending_sales": null}"#,
        )
        .unwrap();
        pending.prepare(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert!(pending.pending_sales.is_empty());
        assert_eq!(pending.pending_stitching[0].stitching_id.as_deref(), Some("2"));
        assert!(pending.pending_stitching.iter().all(|o| o.status.is_expired()));
        assert_eq!(pending.overdue_count(), 2);
    }

    #[test]
    fn working_orders_stay_in_progress() {
        let mut pending: PendingOrders = serde_json::from_str(
            r#"{"working_stitching": [
                    {"stitching_id": 5, "order_date": "2024-02-20", "expected_date": "2024-03-01"}
                ],
                "working_sales": [
                    {"item_id": "A", "order_date": "2024-02-01", "expected_date": "2024-03-10"},
                    {"item_id": "B", "order_date": "2024-02-15", "expected_date": "2024-03-20"}
                ]}"#,
        )
        .unwrap();
        pending.prepare(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert!(!pending.working_stitching[0].status.is_expired());
        assert_eq!(pending.working_sales[0].item_id, "B");
        assert_eq!(pending.in_progress_count(), 3);
        assert_eq!(pending.overdue_count(), 0);
    }
}
