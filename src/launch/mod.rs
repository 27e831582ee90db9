//! Launch orchestration, ini location, notification, and process spawning.
mod exit;
mod launcher;
pub mod location;
mod notify;
mod spawn;

pub use exit::LaunchExit;
pub use launcher::{LaunchOutcome, LaunchRequest, Launcher};
pub use location::{ConfigLocation, CONFIG_ENV_KEY, DRY_RUN_ENV_KEY};
pub use notify::{Notifier, StderrNotifier};
pub use spawn::{build_command, spawn_detached};
