pub mod navigation;
pub mod query;
pub mod selection;
