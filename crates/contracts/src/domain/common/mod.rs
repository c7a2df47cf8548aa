//! Common types and traits for all catalog items

pub mod catalog_item;

// Re-exports
pub use catalog_item::{CatalogItem, FacetDim};
