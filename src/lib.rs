//! Library crate root re-exporting the profile reader, environment applier,
//! argument resolver, and launcher.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod env;
pub mod launch;
pub mod profile;
pub mod resolve;

pub use lib::errors::{Advisory, LaunchError};
