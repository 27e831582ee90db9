//! Launch pipeline: locate ini → apply `[Env]` → resolve `[Run]` → spawn.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use super::{
    location::{
        config_override_from_env, dry_run_requested, ensure_config_exists, locate_config,
        DRY_RUN_ENV_KEY,
    },
    notify::Notifier,
    spawn::spawn_detached,
};
use crate::{
    env::{apply_env_section, ProcessEnvironment},
    lib::{
        errors::{Advisory, LaunchError},
        paths::absolutize,
        telemetry::{log_stage, LaunchStage},
    },
    profile::ProfileFile,
    resolve::{resolve_command, ResolvedCommand},
};

/// Inputs of one launch, normally taken from the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Launcher arguments; index 0 is the launcher itself.
    pub invocation_args: Vec<String>,
    /// Raw `argv[0]`, used to find the ini file next to the launcher.
    pub argv0: Option<OsString>,
    /// Working directory; `None` reads the process working directory.
    pub cwd: Option<PathBuf>,
    pub config_override: Option<OsString>,
    pub dry_run: bool,
}

impl LaunchRequest {
    pub fn from_process() -> Self {
        let raw_args = env::args_os().collect::<Vec<_>>();
        Self {
            invocation_args: raw_args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            argv0: raw_args.first().cloned(),
            cwd: None,
            config_override: config_override_from_env(),
            dry_run: dry_run_requested(env::var_os(DRY_RUN_ENV_KEY).as_deref()),
        }
    }

    fn working_directory(&self) -> Result<PathBuf, LaunchError> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => env::current_dir().map_err(|source| LaunchError::WorkingDirectory { source }),
        }
    }
}

/// How a successful launch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Spawned { pid: u32, command: ResolvedCommand },
    DryRun(ResolvedCommand),
}

/// Runs the launch pipeline once, reporting through a [`Notifier`].
#[derive(Debug)]
pub struct Launcher<N> {
    notifier: N,
    env: ProcessEnvironment,
    stage: LaunchStage,
}

impl<N: Notifier> Launcher<N> {
    pub fn new(notifier: N, env: ProcessEnvironment) -> Self {
        Self {
            notifier,
            env,
            stage: LaunchStage::Start,
        }
    }

    pub fn stage(&self) -> LaunchStage {
        self.stage
    }

    pub fn environment(&self) -> &ProcessEnvironment {
        &self.env
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run every stage. A failure is shown through the notifier before it is returned.
    pub fn run(&mut self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
        let result = self.prepare(request).and_then(|command| {
            if request.dry_run {
                info!(target: "inirun::launch", "Dry run requested; not starting the program");
                return Ok(LaunchOutcome::DryRun(command));
            }
            let pid = spawn_detached(&command)?;
            self.enter(LaunchStage::Spawned);
            Ok(LaunchOutcome::Spawned { pid, command })
        });

        if let Err(err) = &result {
            self.enter(LaunchStage::Failed);
            debug!(target: "inirun::launch", kind = err.kind(), reason = %err, "Launch failed");
            self.notifier.notify_error(err);
        }
        result
    }

    /// Stages up to `CommandResolved`, without spawning.
    pub fn prepare(&mut self, request: &LaunchRequest) -> Result<ResolvedCommand, LaunchError> {
        self.enter(LaunchStage::Start);
        let cwd = request.working_directory()?;
        let location = locate_config(
            request.config_override.as_deref(),
            request.argv0.as_deref(),
            &cwd,
        )?;
        ensure_config_exists(&location)?;
        let profile = ProfileFile::new(&location.path);
        self.enter(LaunchStage::ConfigLocated);

        let applied = apply_env_section(&profile, &mut self.env, &cwd)?;
        info!(target: "inirun::launch", applied, "Applied [Env] section");
        self.enter(LaunchStage::EnvApplied);

        let command = resolve_command(&profile, &self.env, &request.invocation_args)?;
        self.check_target(&command.file_name, &cwd);
        self.enter(LaunchStage::CommandResolved);
        Ok(command)
    }

    fn check_target(&mut self, file_name: &str, cwd: &Path) {
        if absolutize(Path::new(file_name), cwd).exists() {
            return;
        }
        let advisory = Advisory::TargetNotFound(PathBuf::from(file_name));
        debug!(
            target: "inirun::launch",
            program = %file_name,
            "Program not found; starting it anyway"
        );
        self.notifier.notify_advisory(&advisory);
    }

    fn enter(&mut self, stage: LaunchStage) {
        self.stage = stage;
        log_stage(stage);
    }
}
