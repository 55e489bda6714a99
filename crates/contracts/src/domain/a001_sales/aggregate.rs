use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::ListEntity;
use crate::shared::serde_helpers::{
    amount_opt, flexible_date_opt, id_string, null_as_default,
};

pub const SALES_API_PATH: &str = "/api/sales";

/// A sale as returned by `GET /api/sales`.
///
/// `item_id` is chosen by staff when the sale is recorded, not by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(default, deserialize_with = "amount_opt")]
    pub selling_price: Option<f64>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub cost_price: Option<f64>,
    /// Payment / sales channel, free text ("Cash", "UPI", ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cust_name: String,
    /// `None` when the row carries no usable date; such rows sort last.
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub order_date: Option<NaiveDate>,
    /// Whether a stitching order hangs off this sale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stitching: bool,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub expected_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cust_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_details: String,
}

impl SaleRecord {
    /// `selling_price - cost_price`, absent prices counting as 0.
    pub fn margin(&self) -> f64 {
        self.selling_price.unwrap_or(0.0) - self.cost_price.unwrap_or(0.0)
    }
}

impl ListEntity for SaleRecord {
    fn identity(&self) -> Option<&str> {
        Some(self.item_id.as_str()).filter(|id| !id.is_empty())
    }

    fn customer_name(&self) -> &str {
        &self.cust_name
    }

    fn category(&self) -> Option<&str> {
        Some(self.mode.as_str()).filter(|mode| !mode.is_empty())
    }

    fn order_date(&self) -> Option<NaiveDate> {
        self.order_date
    }
}

/// Body of `POST /api/sales` and `PUT /api/sales/<item_id>`.
///
/// Has no `margin`: derived values never leave the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub item_name: String,
    pub selling_price: f64,
    pub cost_price: f64,
    pub mode: String,
    pub cust_name: String,
    pub order_date: String,
    pub stitching: bool,
    pub expected_date: Option<String>,
    pub shipping: String,
    pub cust_address: String,
    pub additional_details: String,
}
