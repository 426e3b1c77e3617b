//! Error types for tagscout using thiserror.

use thiserror::Error;

/// Errors from git queries.
///
/// Everything except [`GitError::UnrecognizedRemote`] is an invocation error,
/// meaning git could not be run, exited non-zero, or was cancelled.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git {command} failed ({}): {output}",
            status.map_or("killed by signal".to_string(), |c| format!("exit code {c}")))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        /// stdout followed by stderr of the failed process.
        output: String,
    },

    #[error("git executable '{program}' not found in PATH")]
    NotInstalled { program: String },

    #[error("Failed to run git {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {command} was cancelled")]
    Cancelled { command: String },

    #[error("could not parse repository info: {raw}")]
    UnrecognizedRemote { raw: String },
}

impl GitError {
    /// True when git itself failed, could not start, or was cancelled.
    pub fn is_invocation(&self) -> bool {
        !self.is_parse()
    }

    /// True when git succeeded but its output had an unexpected shape.
    pub fn is_parse(&self) -> bool {
        matches!(self, GitError::UnrecognizedRemote { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display_includes_output() {
        let err = GitError::CommandFailed {
            command: "describe --tags --abbrev=0".into(),
            status: Some(128),
            output: "fatal: No names found, cannot describe anything.\n".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 128"));
        assert!(msg.contains("No names found"));
        assert!(err.is_invocation());
    }

    #[test]
    fn test_command_failed_without_status() {
        let err = GitError::CommandFailed {
            command: "log".into(),
            status: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("killed by signal"));
    }

    #[test]
    fn test_unrecognized_remote_is_parse_error() {
        let err = GitError::UnrecognizedRemote {
            raw: "/tmp/some/path\n".into(),
        };
        assert!(err.is_parse());
        assert!(!err.is_invocation());
    }

    #[test]
    fn test_cancelled_is_invocation_error() {
        let err = GitError::Cancelled {
            command: "log".into(),
        };
        assert!(err.is_invocation());
        assert_eq!(err.to_string(), "git log was cancelled");
    }
}
