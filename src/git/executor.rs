//! git subprocess spawning.
//!
//! Every query shells out to the system `git` binary, inheriting the user's
//! git config. One process per call; nothing outlives the call.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::GitError;

/// Executable used when no other program is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run git with `args` in `dir` and return its stdout.
    ///
    /// An empty `dir` runs in the process's current directory.
    async fn run(
        &self,
        dir: &Path,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<String, GitError>;
}

/// Default executor that spawns the real git CLI.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemGit {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GIT_PROGRAM)
    }

    /// Use a specific git executable (absolute path or name looked up in PATH).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl GitExecutor for SystemGit {
    async fn run(
        &self,
        dir: &Path,
        args: &[String],
        cancel: &CancellationToken,
    ) -> Result<String, GitError> {
        let command = args.join(" ");

        if cancel.is_cancelled() {
            return Err(GitError::Cancelled { command });
        }

        debug!(dir = %dir.display(), command = %command, "Running git");

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if !dir.as_os_str().is_empty() {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|source| GitError::SpawnFailed {
            command: command.clone(),
            source,
        })?;

        // Losing the race drops the child, and kill_on_drop terminates it.
        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(command = %command, "git cancelled");
                return Err(GitError::Cancelled { command });
            }
            result = child.wait_with_output() => result.map_err(|source| GitError::SpawnFailed {
                command: command.clone(),
                source,
            })?,
        };

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            let status = output.status.code();
            debug!(command = %command, ?status, "git exited with failure");
            return Err(GitError::CommandFailed {
                command,
                status,
                output: combined,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check that the configured git executable is installed and runs.
///
/// Uses the `which` crate for cross-platform executable detection. The
/// `--version` run honours `cancel` like any other query.
pub async fn check_git_installed(
    git: &SystemGit,
    cancel: &CancellationToken,
) -> Result<(), GitError> {
    if which::which(git.program()).is_err() {
        return Err(GitError::NotInstalled {
            program: git.program().display().to_string(),
        });
    }

    git.run(Path::new(""), &["--version".to_string()], cancel)
        .await
        .map(|_| ())
}
