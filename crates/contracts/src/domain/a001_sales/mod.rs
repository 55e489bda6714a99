pub mod aggregate;
pub mod form;

pub use aggregate::{SaleDto, SaleRecord, SALES_API_PATH};
pub use form::SaleForm;
