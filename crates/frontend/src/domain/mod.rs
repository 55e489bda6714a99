pub mod a001_sales;
pub mod a002_stitching;
pub mod a003_billing;
