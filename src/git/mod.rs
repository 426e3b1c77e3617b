//! Git queries via the system git CLI.

pub mod commits;
pub mod executor;
pub mod inspector;
pub mod remote;

pub use commits::{COMMIT_SENTINEL, split_commit_log};
pub use executor::{DEFAULT_GIT_PROGRAM, GitExecutor, SystemGit, check_git_installed};
pub use inspector::RepoInspector;
pub use remote::{RemoteInfo, parse_remote_url};
