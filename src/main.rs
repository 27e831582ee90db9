//! Entry point for inirun.
use std::process::ExitCode;

use anyhow::Context;
use inirun::{
    env::ProcessEnvironment,
    launch::{LaunchExit, LaunchOutcome, LaunchRequest, Launcher, StderrNotifier},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let request = LaunchRequest::from_process();
    let mut launcher = Launcher::new(StderrNotifier, ProcessEnvironment::capture());

    match launcher.run(&request) {
        Ok(LaunchOutcome::DryRun(command)) => {
            let payload = serde_json::to_string_pretty(&command)
                .context("failed to serialize resolved command")
                .map_err(LaunchExit::from_error)?;
            println!("{payload}");
            Ok(())
        }
        Ok(LaunchOutcome::Spawned { .. }) => Ok(()),
        Err(_) => Err(LaunchExit::notified()),
    }
}
