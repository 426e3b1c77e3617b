//! Aggregate of everything a release-notes generator needs.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::GitError;
use crate::git::{GitExecutor, RepoInspector};

/// Facts about one release, gathered from the four inspector queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseFacts {
    pub tag: String,
    pub previous_tag: String,
    /// Commit messages in `previous_tag..tag`, oldest first.
    pub commits: Vec<String>,
    pub owner: String,
    pub name: String,
}

impl<E: GitExecutor> RepoInspector<E> {
    /// Gather release facts for `tag`, or for the latest tag when `None`.
    ///
    /// Steps:
    /// 1. resolve the tag (`latest_tag` when not given)
    /// 2. `previous_tag(tag)`
    /// 3. `commits(previous, tag)`
    /// 4. `repo_info()`
    ///
    /// The first failing step aborts the whole aggregate.
    pub async fn release_facts(
        &self,
        cancel: &CancellationToken,
        tag: Option<&str>,
    ) -> Result<ReleaseFacts, GitError> {
        let tag = match tag {
            Some(t) => t.to_string(),
            None => self.latest_tag(cancel).await?,
        };
        let previous_tag = self.previous_tag(cancel, &tag).await?;
        let commits = self.commits(cancel, &previous_tag, &tag).await?;
        let remote = self.repo_info(cancel).await?;

        debug!(
            tag = %tag,
            previous_tag = %previous_tag,
            commits = commits.len(),
            "Gathered release facts"
        );

        Ok(ReleaseFacts {
            tag,
            previous_tag,
            commits,
            owner: remote.owner,
            name: remote.name,
        })
    }
}
