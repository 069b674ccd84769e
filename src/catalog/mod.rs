pub mod catalog_loader;
pub mod error;
pub mod parse_catalog;
