use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::coerce::text_opt;
use crate::shared::error::AppError;
use crate::shared::serde_helpers::{
    amount_opt, flexible_date_opt, id_string, id_string_opt, null_as_default,
};

pub const BILLING_API_PATH: &str = "/api/billing";

/// A row of `GET /api/billing`. The server computes `total_amount` from the
/// sale and stitching order sharing the bill's `item_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(deserialize_with = "id_string")]
    pub bill_id: String,
    #[serde(default, deserialize_with = "id_string_opt")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub bill_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "id_string_opt")]
    pub stitching_id: Option<String>,
}

impl Bill {
    pub fn total(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }
}

/// Newest bill first, undated bills last; bills from the same day keep their server order.
pub fn sort_bills_newest_first(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.bill_date.cmp(&a.bill_date));
}

/// Body of `POST /api/billing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBillRequest {
    pub item_id: String,
}

impl CreateBillRequest {
    pub fn new(item_id: &str) -> Result<Self, AppError> {
        text_opt(item_id)
            .map(|id| Self {
                item_id: id.trim().to_string(),
            })
            .ok_or_else(|| AppError::Validation("Item ID is required to create a bill.".into()))
    }
}

/// Response of `POST /api/billing`: the stored bill plus what it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetails {
    #[serde(default, deserialize_with = "id_string_opt")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub bill_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "id_string_opt")]
    pub stitching_id: Option<String>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub stitching_price: Option<f64>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_item_id() {
        assert!(CreateBillRequest::new("  ").unwrap_err().is_validation());
        assert_eq!(CreateBillRequest::new(" S-9 ").unwrap().item_id, "S-9");
    }

    #[test]
    fn bills_sort_by_date_descending() {
        let mut bills: Vec<Bill> = serde_json::from_str(
            r#"[{"bill_id": 4, "item_id": "D", "bill_date": null},
                {"bill_id": 1, "item_id": "A", "total_amount": 100, "bill_date": "2024-01-02"},
                {"bill_id": 2, "item_id": "B", "total_amount": null, "bill_date": "2024-03-02"},
                {"bill_id": 3, "item_id": null, "bill_date": "2024-02-02", "stitching_id": 7}]"#,
        )
        .unwrap();
        sort_bills_newest_first(&mut bills);
        let ids: Vec<_> = bills.iter().map(|b| b.bill_id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1", "4"]);
        assert_eq!(bills[0].total(), 0.0);
        assert_eq!(bills[1].stitching_id.as_deref(), Some("7"));
    }

    #[test]
    fn details_tolerate_partial_links() {
        let details: BillDetails = serde_json::from_str(
            r#"{"item_id": "S-1", "total_amount": 1500, "bill_date": "2024-06-01",
                "sale_price": 1500, "customer_name": "Bob", "stitching_id": null}"#,
        )
        .unwrap();
        assert_eq!(details.stitching_id, None);
        assert_eq!(details.stitching_price, None);
        assert_eq!(details.total_amount, Some(1500.0));
    }
}
