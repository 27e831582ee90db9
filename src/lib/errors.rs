use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal errors that abort a launch before (or while) the child is spawned.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The ini file is missing or cannot be read.
    #[error("Cannot read ini file {path}: {source}")]
    ConfigAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A required `[Run]` setting is absent or empty.
    #[error("Missing {key}= setting in the [Run] section of ini file {path}")]
    MissingSetting { key: &'static str, path: PathBuf },
    /// A `%N` placeholder has neither an invocation argument nor an `ArgN=` default.
    #[error(
        "Argument %{index} was not passed and default setting Arg{index}= was not found in the [Run] section of ini file {path}"
    )]
    MissingArgument { index: usize, path: PathBuf },
    /// The resolved argument string cannot be split into words.
    #[error("Cannot split arguments `{args}`: {reason}")]
    ArgumentSyntax { args: String, reason: String },
    /// The OS refused to start the target program.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The launcher's own executable path is unknown.
    #[error("Cannot determine the launcher path: {source}")]
    LauncherPath {
        #[source]
        source: io::Error,
    },
    /// The current working directory is unknown.
    #[error("Cannot determine the current directory: {source}")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn config_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigAccess {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly name used in log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            LaunchError::ConfigAccess { .. } => "config_access",
            LaunchError::MissingSetting { .. } => "missing_setting",
            LaunchError::MissingArgument { .. } => "missing_argument",
            LaunchError::ArgumentSyntax { .. } => "argument_syntax",
            LaunchError::Spawn { .. } => "spawn",
            LaunchError::LauncherPath { .. } => "launcher_path",
            LaunchError::WorkingDirectory { .. } => "working_directory",
        }
    }
}

/// Non-fatal findings reported to the user while the launch continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The resolved `FileName` does not exist on disk; the spawn is attempted anyway.
    TargetNotFound(PathBuf),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::TargetNotFound(path) => {
                write!(f, "Could not find file {}", path.display())
            }
        }
    }
}
