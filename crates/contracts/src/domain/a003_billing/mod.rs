pub mod aggregate;

pub use aggregate::{sort_bills_newest_first, Bill, BillDetails, CreateBillRequest, BILLING_API_PATH};
