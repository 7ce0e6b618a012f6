pub mod clock;
pub mod site_writer;

pub use clock::Clock;
pub use site_writer::{SiteWriter, SiteWriterError};
