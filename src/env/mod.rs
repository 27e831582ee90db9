//! Environment context, `%VAR%` expansion, and `[Env]` section application.
mod apply;
mod environment;
mod expand;

pub use apply::{apply_env_section, resolve_env_value, CWD_TOKEN};
pub use environment::ProcessEnvironment;
pub use expand::expand;
