use chrono::NaiveDate;

use super::aggregate::{StitchingDto, StitchingOrder};
use crate::domain::common::EntityForm;
use crate::shared::coerce::{
    amount_text, date_text, date_text_opt, format_date, parse_amount, text_opt,
};
use crate::shared::error::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Text state of the add/edit stitching form.
///
/// `stitching_id` is only shown, read-only, while editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchingForm {
    pub stitching_id: String,
    pub item_id: String,
    pub item_name: String,
    pub cust_name: String,
    pub stitching_preference: String,
    pub tailor_price: String,
    pub selling_price: String,
    pub order_date: String,
    pub expected_date: String,
    pub additional_details: String,
}

impl StitchingForm {
    pub fn missing_required(&self) -> bool {
        self.item_name.trim().is_empty() || self.cust_name.trim().is_empty()
    }
}

impl EntityForm for StitchingForm {
    type Record = StitchingOrder;
    type Payload = StitchingDto;

    fn blank(today: NaiveDate) -> Self {
        Self {
            order_date: format_date(today),
            ..Self::default()
        }
    }

    fn from_record(record: &StitchingOrder) -> Self {
        Self {
            stitching_id: record.stitching_id.clone().unwrap_or_default(),
            item_id: record.item_id.clone().unwrap_or_default(),
            item_name: record.item_name.clone(),
            cust_name: record.cust_name.clone(),
            stitching_preference: record.stitching_preference.clone(),
            tailor_price: amount_text(record.tailor_price),
            selling_price: amount_text(record.selling_price),
            order_date: date_text(record.order_date),
            expected_date: date_text(record.expected_date),
            additional_details: record.additional_details.clone(),
        }
    }

    fn to_payload(&self) -> Result<StitchingDto, AppError> {
        if self.missing_required() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(StitchingDto {
            item_id: text_opt(&self.item_id),
            item_name: self.item_name.clone(),
            cust_name: self.cust_name.clone(),
            stitching_preference: self.stitching_preference.clone(),
            tailor_price: parse_amount(&self.tailor_price),
            selling_price: parse_amount(&self.selling_price),
            order_date: date_text_opt(&self.order_date).unwrap_or_default(),
            expected_date: date_text_opt(&self.expected_date),
            additional_details: self.additional_details.clone(),
        })
    }
}
