//! Building and starting the child process.
use std::process::Command;

use tracing::info;

use crate::{lib::errors::LaunchError, resolve::ResolvedCommand};

/// Build the child command: program, arguments, and `[Env]` overrides.
///
/// On Windows the argument string is handed over verbatim as the command
/// line tail. Elsewhere it is split into words with POSIX shell quoting.
pub fn build_command(resolved: &ResolvedCommand) -> Result<Command, LaunchError> {
    let mut command = Command::new(&resolved.file_name);
    command.envs(&resolved.env);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;

        if !resolved.args.is_empty() {
            command.raw_arg(&resolved.args);
        }
    }

    #[cfg(not(windows))]
    {
        command.args(split_args(&resolved.args)?);
    }

    Ok(command)
}

#[cfg(not(windows))]
fn split_args(args: &str) -> Result<Vec<String>, LaunchError> {
    shell_words::split(args).map_err(|err| LaunchError::ArgumentSyntax {
        args: args.to_string(),
        reason: err.to_string(),
    })
}

/// Start the child without waiting for it. Returns its process id.
pub fn spawn_detached(resolved: &ResolvedCommand) -> Result<u32, LaunchError> {
    let child = build_command(resolved)?
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: resolved.file_name.clone(),
            source,
        })?;
    let pid = child.id();
    info!(
        target: "inirun::launch",
        pid,
        program = %resolved.file_name,
        "Started child process"
    );
    Ok(pid)
}
