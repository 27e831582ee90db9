//! Shared path helpers reused by the launcher and the environment applier.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Extension of the ini file that sits next to the launcher.
pub const INI_EXTENSION: &str = "ini";

/// Returns true if the raw command-line path names a location rather than a bare program name.
pub fn has_path_separator(raw: &OsStr) -> bool {
    let text = raw.to_string_lossy();
    text.contains('/') || (cfg!(windows) && text.contains('\\'))
}

/// Join `path` onto `cwd` unless it is already absolute.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    cwd.join(path)
}

/// Same directory and stem as `launcher`, with the ini extension.
pub fn ini_path_for(launcher: &Path) -> PathBuf {
    launcher.with_extension(INI_EXTENSION)
}
