pub mod api_utils;
pub mod catalog;
pub mod frame_measure;
