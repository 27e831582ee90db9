//! Profile-file reading: `[Section]` headers followed by `key=value` lines.
mod parser;
mod store;

pub use parser::{Entry, ProfileDocument, Section};
pub use store::ProfileFile;

/// Section whose keys become environment variables.
pub const ENV_SECTION: &str = "Env";
/// Section describing the program to start.
pub const RUN_SECTION: &str = "Run";
