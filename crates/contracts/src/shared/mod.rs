pub mod branding;
pub mod catalog;
pub mod config;
pub mod error;
pub mod serde_utils;
