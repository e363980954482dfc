pub mod catalog;
pub mod filter;
pub mod models;
pub mod selection;
