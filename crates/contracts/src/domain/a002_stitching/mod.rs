pub mod aggregate;
pub mod form;

pub use aggregate::{OrderStatus, StitchingDto, StitchingOrder, STITCHING_API_PATH};
pub use form::StitchingForm;
