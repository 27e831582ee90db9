//! Tracing initialization and launch-stage log helpers.

use std::{io::IsTerminal, path::Path};

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_KEY: &str = "INIRUN_LOG";
// User-facing messages go through the notifier; logs are opt-in.
const DEFAULT_DIRECTIVES: &str = "off";

/// Initialize `tracing` with stderr output.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_env(LOG_ENV_KEY)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Launch pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStage {
    Start,
    ConfigLocated,
    EnvApplied,
    CommandResolved,
    Spawned,
    Failed,
}

impl LaunchStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchStage::Start => "start",
            LaunchStage::ConfigLocated => "config_located",
            LaunchStage::EnvApplied => "env_applied",
            LaunchStage::CommandResolved => "command_resolved",
            LaunchStage::Spawned => "spawned",
            LaunchStage::Failed => "failed",
        }
    }
}

pub fn log_stage(stage: LaunchStage) {
    debug!(target: "inirun::launch", stage = stage.as_str(), "Entered launch stage");
}

pub fn log_config_source(path: &Path, from_env: bool) {
    if from_env {
        info!(
            target: "inirun::launch",
            path = %path.display(),
            "Using ini file from INIRUN_CONFIG environment variable"
        );
    } else {
        debug!(
            target: "inirun::launch",
            path = %path.display(),
            "INIRUN_CONFIG not set; using ini file next to the launcher"
        );
    }
}
