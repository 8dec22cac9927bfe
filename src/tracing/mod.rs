pub mod file;
pub mod filter;

pub use file::LogGuards;
pub use file::setup_tracing;
