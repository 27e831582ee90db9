use std::process::ExitCode;

use anyhow::Error;

/// Bundles a failure message (if not yet shown to the user) with an exit code.
#[derive(Debug)]
pub struct LaunchExit {
    message: Option<String>,
    exit_code: ExitCode,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("{err:?}")),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Failure whose message already went through a `Notifier`.
    pub fn notified() -> Self {
        Self {
            message: None,
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn report(self) -> ExitCode {
        if let Some(message) = self.message {
            eprintln!("{message}");
        }
        self.exit_code
    }
}
