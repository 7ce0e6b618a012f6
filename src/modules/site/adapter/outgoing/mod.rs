pub mod fs_site_writer;
pub mod system_clock;

pub use fs_site_writer::FsSiteWriter;
pub use system_clock::SystemClock;
