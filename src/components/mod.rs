pub mod chip_row;
pub mod footer;
pub mod header;
pub mod suggestion_list;
