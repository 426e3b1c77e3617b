//! tagscout - extract release facts from a local git checkout.
//!
//! # Overview
//!
//! tagscout shells out to the system `git` to answer four questions a
//! release-notes generator asks: the latest tag, the tag before a given
//! tag, the commit messages between two tags, and the owner/name of the
//! `origin` remote. [`RepoInspector`] is the entry point.

pub mod config;
pub mod error;
pub mod git;
pub mod release;

// Re-export commonly used types
pub use config::InspectorConfig;
pub use error::GitError;
pub use git::{GitExecutor, RemoteInfo, RepoInspector, SystemGit};
pub use release::ReleaseFacts;
