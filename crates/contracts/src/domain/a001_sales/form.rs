use chrono::NaiveDate;

use super::aggregate::{SaleDto, SaleRecord};
use crate::domain::common::EntityForm;
use crate::shared::coerce::{
    amount_text, date_text, date_text_opt, format_date, parse_amount_or_zero, text_opt,
};
use crate::shared::error::AppError;

/// Text state of the add/edit sale form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    pub item_id: String,
    pub item_name: String,
    pub selling_price: String,
    pub cost_price: String,
    pub mode: String,
    pub cust_name: String,
    pub order_date: String,
    pub stitching: bool,
    pub expected_date: String,
    pub shipping: String,
    pub cust_address: String,
    pub additional_details: String,
}

impl EntityForm for SaleForm {
    type Record = SaleRecord;
    type Payload = SaleDto;

    fn blank(today: NaiveDate) -> Self {
        Self {
            order_date: format_date(today),
            ..Self::default()
        }
    }

    fn from_record(record: &SaleRecord) -> Self {
        Self {
            item_id: record.item_id.clone(),
            item_name: record.item_name.clone(),
            selling_price: amount_text(record.selling_price),
            cost_price: amount_text(record.cost_price),
            mode: record.mode.clone(),
            cust_name: record.cust_name.clone(),
            order_date: date_text(record.order_date),
            stitching: record.stitching,
            expected_date: date_text(record.expected_date),
            shipping: record.shipping.clone(),
            cust_address: record.cust_address.clone(),
            additional_details: record.additional_details.clone(),
        }
    }

    /// Prices default to 0 when left blank. Sales have no required fields on
    /// the client; the server reports what is missing.
    fn to_payload(&self) -> Result<SaleDto, AppError> {
        Ok(SaleDto {
            item_id: text_opt(&self.item_id),
            item_name: self.item_name.clone(),
            selling_price: parse_amount_or_zero(&self.selling_price),
            cost_price: parse_amount_or_zero(&self.cost_price),
            mode: self.mode.clone(),
            cust_name: self.cust_name.clone(),
            order_date: date_text_opt(&self.order_date).unwrap_or_default(),
            stitching: self.stitching,
            expected_date: date_text_opt(&self.expected_date),
            shipping: self.shipping.clone(),
            cust_address: self.cust_address.clone(),
            additional_details: self.additional_details.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_form_only_sets_order_date() {
        let form = SaleForm::blank(day(2024, 6, 9));
        assert_eq!(form.order_date, "2024-06-09");
        assert_eq!(
            SaleForm {
                order_date: String::new(),
                ..form
            },
            SaleForm::default()
        );
    }

    #[test]
    fn edit_form_renders_numbers_and_dates_as_text() {
        let sale: SaleRecord = serde_json::from_str(
            r#"{"item_id": "S-7", "item_name": "Lehenga", "selling_price": 2500.5,
                "cost_price": 1800, "mode": "UPI", "cust_name": "Bob Singh",
                "order_date": "2024-03-15T10:00:00Z", "stitching": true,
                "expected_date": "2024-04-01"}"#,
        )
        .unwrap();
        let form = SaleForm::from_record(&sale);
        assert_eq!(form.selling_price, "2500.5");
        assert_eq!(form.cost_price, "1800");
        assert_eq!(form.order_date, "2024-03-15");
        assert_eq!(form.expected_date, "2024-04-01");
        assert!(form.stitching);
    }

    #[test]
    fn blank_prices_become_zero_and_blank_dates_null() {
        let form = SaleForm {
            item_id: "S-1".into(),
            item_name: "Kurta".into(),
            cust_name: "Alice Rao".into(),
            order_date: "2024-05-01".into(),
            ..SaleForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.selling_price, 0.0);
        assert_eq!(payload.cost_price, 0.0);
        assert_eq!(payload.expected_date, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["expected_date"].is_null());
        assert_eq!(json["selling_price"], serde_json::json!(0.0));
        assert!(json.get("margin").is_none());
    }

    #[test]
    fn blank_item_id_is_left_out_of_the_body() {
        let payload = SaleForm::blank(day(2024, 1, 1)).to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("item_id").is_none());
        assert_eq!(json["order_date"], "2024-01-01");
    }

    #[test]
    fn typed_prices_are_sent_as_numbers() {
        let form = SaleForm {
            selling_price: "100".into(),
            cost_price: "60.25".into(),
            stitching: true,
            ..SaleForm::blank(day(2024, 1, 1))
        };
        let json = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(json["selling_price"], serde_json::json!(100.0));
        assert_eq!(json["cost_price"], serde_json::json!(60.25));
        assert_eq!(json["stitching"], serde_json::json!(true));
    }
}
