use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use serde_json::Value;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_inirun");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Launcher command with a clean set of inirun variables.
pub fn launcher_command(program: &Path, config: Option<&Path>) -> Command {
    let mut command = Command::new(program);
    command
        .env_remove("INIRUN_CONFIG")
        .env_remove("INIRUN_DRY_RUN")
        .env_remove("INIRUN_LOG");
    if let Some(config) = config {
        command.env("INIRUN_CONFIG", config);
    }
    command
}

pub fn run_dry(command: &mut Command) -> Result<(Output, Value)> {
    let output = command
        .env("INIRUN_DRY_RUN", "1")
        .output()
        .context("failed to run launcher")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload = serde_json::from_str(&stdout)
        .with_context(|| format!("stdout is not JSON: {stdout}"))?;
    Ok((output, payload))
}
