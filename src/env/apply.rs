use std::path::Path;

use tracing::debug;

use super::{expand, ProcessEnvironment};
use crate::{
    lib::errors::LaunchError,
    profile::{ProfileFile, ENV_SECTION},
};

/// Token in `[Env]` values replaced by the launcher's working directory.
pub const CWD_TOKEN: char = '~';

/// Resolve one raw `[Env]` value: `~` becomes `cwd`, then `%VAR%` expansion.
pub fn resolve_env_value(raw: &str, cwd: &Path, env: &ProcessEnvironment) -> String {
    let replaced = raw.replace(CWD_TOKEN, &cwd.to_string_lossy());
    expand(&replaced, env)
}

/// Install every `[Env]` entry of `profile` into `env`.
///
/// Entries apply in file order and each value is resolved against the
/// environment as updated by the entries above it. Returns the number of
/// variables set.
pub fn apply_env_section(
    profile: &ProfileFile,
    env: &mut ProcessEnvironment,
    cwd: &Path,
) -> Result<usize, LaunchError> {
    let keys = profile.keys(ENV_SECTION)?;

    for key in &keys {
        let raw = profile
            .get_string(ENV_SECTION, key, Some(""))?
            .unwrap_or_default();
        let value = resolve_env_value(&raw, cwd, env);
        debug!(target: "inirun::env", key = %key, "Applied environment variable");
        env.set(key, value);
    }

    Ok(keys.len())
}
