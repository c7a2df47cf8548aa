pub mod aggregate;
pub mod branding;
pub mod page;

pub use aggregate::{LinkType, Resource};
pub use branding::{ProgramGroup, ResourceBranding};
pub use page::ResourcePage;
