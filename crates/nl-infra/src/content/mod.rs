//! Site content sources.

mod embedded;
mod file;

pub use embedded::EmbeddedContentSource;
pub use file::FileContentSource;
