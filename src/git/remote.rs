//! Owner/repository extraction from a remote URL.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::GitError;

/// Matches, each with an optional `.git`:
/// - `scheme://[user@]host[:port]/owner/repo`
/// - `user@host:owner/repo`, where `host` may be any ssh alias
/// - `host/owner/repo` or `host:owner/repo`
///
/// Without a scheme or `user@` the host needs a dot (or be `localhost`) so
/// that local filesystem paths are rejected. Ports are only read after a
/// scheme; in scp-style URLs the digits after `:` are the owner.
static REMOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/\s]+@)?",
        r"(?:localhost|[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)(?::[0-9]+)?/",
        r"|[^@/:\s]+@[^@/:\s]+:",
        r"|(?:localhost|[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)[:/]",
        r")",
        r"(?P<owner>[^/\s]+)/(?P<repo>[^/\s]+?)(?:\.git)?(?:/\S*)?\s*$",
    ))
    .expect("remote URL pattern is valid")
});

/// Owner and repository name of a remote.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RemoteInfo {
    pub owner: String,
    pub name: String,
}

/// Extract owner and repository name from a remote URL.
///
/// Trailing whitespace (git's newline) is ignored. Anything after the
/// repository segment is dropped.
pub fn parse_remote_url(url: &str) -> Result<RemoteInfo, GitError> {
    let caps = REMOTE_RE
        .captures(url)
        .ok_or_else(|| GitError::UnrecognizedRemote {
            raw: url.to_string(),
        })?;

    Ok(RemoteInfo {
        owner: caps["owner"].to_string(),
        name: caps["repo"].to_string(),
    })
}
