pub mod common;

pub mod a001_howto;
pub mod a002_policy;
pub mod a003_resource;
