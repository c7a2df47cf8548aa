pub mod aggregate;
pub mod branding;
pub mod page;

pub use aggregate::{HowtoCategory, HowtoFormat, HowtoItem};
pub use branding::HowtoBranding;
pub use page::HowtoPage;
