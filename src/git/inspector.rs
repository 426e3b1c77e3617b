//! Release queries against a working directory.

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::error::GitError;

use super::commits::{log_format_arg, split_commit_log};
use super::executor::{GitExecutor, SystemGit};
use super::remote::{RemoteInfo, parse_remote_url};

/// Stateless accessor for release facts of the repository at `dir`.
///
/// Every query spawns one git process in `dir` and parses its output. An
/// empty `dir` means the current directory. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RepoInspector<E = SystemGit> {
    dir: PathBuf,
    executor: E,
}

impl RepoInspector<SystemGit> {
    /// Inspector that runs the system `git`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_executor(dir, SystemGit::new())
    }
}

impl<E: GitExecutor> RepoInspector<E> {
    pub fn with_executor(dir: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            dir: dir.into(),
            executor,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn git(&self, args: &[&str], cancel: &CancellationToken) -> Result<String, GitError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.executor.run(&self.dir, &args, cancel).await
    }

    /// Most recent tag reachable from HEAD.
    pub async fn latest_tag(&self, cancel: &CancellationToken) -> Result<String, GitError> {
        let out = self
            .git(&["describe", "--tags", "--abbrev=0"], cancel)
            .await?;
        Ok(strip_newline(&out).to_string())
    }

    /// Nearest tag reachable from the parent of `tag`.
    ///
    /// `tag` may be any reference git resolves, e.g. `@` for the current
    /// checkout. The answer follows ancestry, not tag name ordering.
    pub async fn previous_tag(
        &self,
        cancel: &CancellationToken,
        tag: &str,
    ) -> Result<String, GitError> {
        let parent = format!("{tag}^");
        let out = self
            .git(&["describe", "--tags", "--abbrev=0", &parent], cancel)
            .await?;
        Ok(strip_newline(&out).to_string())
    }

    /// Full messages of the commits reachable from `to` but not from `from`,
    /// oldest first.
    pub async fn commits(
        &self,
        cancel: &CancellationToken,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, GitError> {
        let range = format!("{from}..{to}");
        let format = log_format_arg();
        let out = self
            .git(&["log", "--oneline", &range, &format, "--reverse"], cancel)
            .await?;
        Ok(split_commit_log(&out))
    }

    /// Owner and repository name from the `origin` remote URL.
    pub async fn repo_info(&self, cancel: &CancellationToken) -> Result<RemoteInfo, GitError> {
        let out = self
            .git(&["config", "--get", "remote.origin.url"], cancel)
            .await?;
        parse_remote_url(&out)
    }
}

fn strip_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}
