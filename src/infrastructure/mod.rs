pub mod catalog_file;
pub mod logging;
