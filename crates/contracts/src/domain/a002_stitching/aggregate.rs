use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::ListEntity;
use crate::shared::serde_helpers::{
    amount_opt, flexible_date_opt, id_string_opt, null_as_default,
};

pub const STITCHING_API_PATH: &str = "/api/stitching";

/// Progress of a stitching order relative to its expected date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Expired,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 2] = [OrderStatus::InProgress, OrderStatus::Expired];

    /// Expired once `today` is past `expected`. The expected day itself is
    /// still in progress; no expected date means never expired.
    pub fn derive(expected: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expected {
            Some(expected) if today > expected => OrderStatus::Expired,
            _ => OrderStatus::InProgress,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Expired => "Expired",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, OrderStatus::Expired)
    }
}

/// A stitching order as returned by `GET /api/stitching`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchingOrder {
    /// Assigned by the server; never edited.
    #[serde(default, deserialize_with = "id_string_opt")]
    pub stitching_id: Option<String>,
    /// Sale this order was created from, if any.
    #[serde(default, deserialize_with = "id_string_opt")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cust_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stitching_preference: String,
    #[serde(default, deserialize_with = "amount_opt")]
    pub tailor_price: Option<f64>,
    #[serde(default, deserialize_with = "amount_opt")]
    pub selling_price: Option<f64>,
    /// `None` when the row carries no usable date; such rows sort last.
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub expected_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_details: String,
    #[serde(skip)]
    pub status: OrderStatus,
}

impl StitchingOrder {
    pub fn margin(&self) -> f64 {
        self.selling_price.unwrap_or(0.0) - self.tailor_price.unwrap_or(0.0)
    }
}

impl ListEntity for StitchingOrder {
    fn identity(&self) -> Option<&str> {
        self.stitching_id.as_deref()
    }

    fn customer_name(&self) -> &str {
        &self.cust_name
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.label())
    }

    fn order_date(&self) -> Option<NaiveDate> {
        self.order_date
    }

    fn derive(&mut self, today: NaiveDate) {
        self.status = OrderStatus::derive(self.expected_date, today);
    }
}

/// Body of `POST /api/stitching` and `PUT /api/stitching/<stitching_id>`.
///
/// Nullable columns are sent as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchingDto {
    pub item_id: Option<String>,
    pub item_name: String,
    pub cust_name: String,
    pub stitching_preference: String,
    pub tailor_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub order_date: String,
    pub expected_date: Option<String>,
    pub additional_details: String,
}
