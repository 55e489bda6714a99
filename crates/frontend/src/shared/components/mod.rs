pub mod data_table;
pub mod filter_panel;
pub mod stat_card;
