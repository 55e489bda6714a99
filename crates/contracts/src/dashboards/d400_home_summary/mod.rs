pub mod dto;

pub use dto::{PendingOrders, SummaryMetrics, HOME_PENDING_API_PATH, HOME_SUMMARY_API_PATH};
