//! Locating the ini file and reading launcher settings from the environment.
use std::{
    env,
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

use crate::lib::{
    errors::LaunchError,
    paths::{absolutize, has_path_separator, ini_path_for},
    telemetry,
};

/// Overrides the ini path derived from the launcher's own path.
pub const CONFIG_ENV_KEY: &str = "INIRUN_CONFIG";
/// Resolve and print the command instead of starting it.
pub const DRY_RUN_ENV_KEY: &str = "INIRUN_DRY_RUN";

/// Resolved ini file path and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub from_env: bool,
}

/// Resolve the ini path in the order: `INIRUN_CONFIG` → launcher path with `.ini`.
pub fn locate_config(
    override_path: Option<&OsStr>,
    argv0: Option<&OsStr>,
    cwd: &Path,
) -> Result<ConfigLocation, LaunchError> {
    let location = match override_path.filter(|value| !value.is_empty()) {
        Some(value) => ConfigLocation {
            path: absolutize(Path::new(value), cwd),
            from_env: true,
        },
        None => ConfigLocation {
            path: ini_path_for(&launcher_path(argv0, cwd)?),
            from_env: false,
        },
    };

    telemetry::log_config_source(&location.path, location.from_env);
    Ok(location)
}

/// Path of the running launcher.
///
/// `argv[0]` is preferred when it names a location so that a renamed copy or
/// a symlink finds its own ini file; a bare program name falls back to the
/// OS-reported executable.
pub fn launcher_path(argv0: Option<&OsStr>, cwd: &Path) -> Result<PathBuf, LaunchError> {
    if let Some(raw) = argv0.filter(|raw| has_path_separator(raw)) {
        return Ok(absolutize(Path::new(raw), cwd));
    }
    env::current_exe().map_err(|source| LaunchError::LauncherPath { source })
}

/// Fail with `ConfigAccess` unless the ini file exists.
pub fn ensure_config_exists(location: &ConfigLocation) -> Result<(), LaunchError> {
    fs::metadata(&location.path)
        .map(|_| ())
        .map_err(|err| LaunchError::config_access(&location.path, err))
}

/// Interpret `INIRUN_DRY_RUN`: `1`, `true`, or `yes` in any case.
pub fn dry_run_requested(value: Option<&OsStr>) -> bool {
    value
        .and_then(OsStr::to_str)
        .map(str::trim)
        .is_some_and(|value| {
            value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
        })
}

/// Read `INIRUN_CONFIG` from the process environment.
pub fn config_override_from_env() -> Option<OsString> {
    env::var_os(CONFIG_ENV_KEY)
}
