use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::ArgsTemplate;
use crate::{
    env::{expand, ProcessEnvironment},
    lib::errors::LaunchError,
    profile::{ProfileFile, RUN_SECTION},
};

pub const FILE_NAME_KEY: &str = "FileName";
pub const ARGS_KEY: &str = "Args";

/// Program, argument string, and environment overrides for the child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommand {
    pub file_name: String,
    pub args: String,
    pub env: BTreeMap<String, String>,
}

/// `[Run]` key holding the default for placeholder `%index`.
pub fn arg_default_key(index: usize) -> String {
    format!("Arg{index}")
}

/// Expanded `Run.FileName`; absent or empty is an error.
pub fn resolve_file_name(
    profile: &ProfileFile,
    env: &ProcessEnvironment,
) -> Result<String, LaunchError> {
    let raw = profile
        .get_string(RUN_SECTION, FILE_NAME_KEY, Some(""))?
        .unwrap_or_default();
    let file_name = expand(&raw, env);
    if file_name.is_empty() {
        return Err(LaunchError::MissingSetting {
            key: FILE_NAME_KEY,
            path: profile.path().to_path_buf(),
        });
    }

    debug!(target: "inirun::resolve", file_name = %file_name, "Resolved FileName");
    Ok(file_name)
}

/// Expanded `Run.Args` with `%N` placeholders substituted.
///
/// `invocation_args[0]` is the launcher itself. A non-empty invocation
/// argument wins over `Run.ArgN`; with neither, the first such placeholder
/// fails the resolution.
pub fn resolve_args<S: AsRef<str>>(
    profile: &ProfileFile,
    env: &ProcessEnvironment,
    invocation_args: &[S],
) -> Result<String, LaunchError> {
    let raw = profile
        .get_string(RUN_SECTION, ARGS_KEY, Some(""))?
        .unwrap_or_default();
    let expanded = expand(&raw, env);
    if expanded.is_empty() {
        return Ok(expanded);
    }

    let args = ArgsTemplate::parse(&expanded).render(|index| {
        if let Some(value) = invocation_args
            .get(index)
            .map(AsRef::<str>::as_ref)
            .filter(|value| !value.is_empty())
        {
            debug!(
                target: "inirun::resolve",
                index,
                source = "invocation",
                "Resolved placeholder"
            );
            return Ok(value.to_string());
        }

        match profile.get_string(RUN_SECTION, &arg_default_key(index), None)? {
            Some(default) => {
                debug!(
                    target: "inirun::resolve",
                    index,
                    source = "default",
                    "Resolved placeholder"
                );
                Ok(expand(&default, env))
            }
            None => Err(LaunchError::MissingArgument {
                index,
                path: profile.path().to_path_buf(),
            }),
        }
    })?;

    debug!(target: "inirun::resolve", args = %args, "Resolved Args");
    Ok(args)
}

/// Resolve both `[Run]` settings and capture the environment overrides.
pub fn resolve_command<S: AsRef<str>>(
    profile: &ProfileFile,
    env: &ProcessEnvironment,
    invocation_args: &[S],
) -> Result<ResolvedCommand, LaunchError> {
    let file_name = resolve_file_name(profile, env)?;
    let args = resolve_args(profile, env, invocation_args)?;
    Ok(ResolvedCommand {
        file_name,
        args,
        env: env.applied().clone(),
    })
}
