//! Runtime configuration for the `tagscout` binary.
//!
//! The library itself reads no environment; only the CLI does.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::git::{DEFAULT_GIT_PROGRAM, SystemGit};

/// Environment variable naming the git executable.
pub const GIT_ENV_VAR: &str = "TAGSCOUT_GIT";

/// Environment variable bounding each run, in seconds.
pub const TIMEOUT_ENV_VAR: &str = "TAGSCOUT_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    pub git_program: PathBuf,
    /// Deadline after which in-flight git processes are cancelled.
    pub timeout: Option<Duration>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            git_program: PathBuf::from(DEFAULT_GIT_PROGRAM),
            timeout: None,
        }
    }
}

impl InspectorConfig {
    /// Read `TAGSCOUT_GIT` and `TAGSCOUT_TIMEOUT`.
    ///
    /// Logs a warning if the timeout is set but not a whole number of
    /// seconds, and runs without a deadline instead.
    pub fn from_env() -> Self {
        let git_program = match env::var(GIT_ENV_VAR) {
            Ok(v) if !v.is_empty() => PathBuf::from(v),
            _ => PathBuf::from(DEFAULT_GIT_PROGRAM),
        };

        let timeout = match env::var(TIMEOUT_ENV_VAR) {
            Ok(v) if !v.is_empty() => match v.parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warn!("Invalid {} value '{}', running without timeout", TIMEOUT_ENV_VAR, v);
                    None
                }
            },
            _ => None,
        };

        Self {
            git_program,
            timeout,
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, git: Option<PathBuf>, timeout_secs: Option<u64>) -> Self {
        if let Some(git) = git {
            self.git_program = git;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn executor(&self) -> SystemGit {
        SystemGit::with_program(&self.git_program)
    }
}
