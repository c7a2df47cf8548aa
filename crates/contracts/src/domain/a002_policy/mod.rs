pub mod aggregate;
pub mod branding;
pub mod page;

pub use aggregate::{Policy, PolicyCategory, PolicySection};
pub use branding::PolicyBranding;
pub use page::PolicyPage;
