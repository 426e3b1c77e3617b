//! Sentinel-delimited commit log parsing.

/// Record separator placed before every commit body in `git log` output.
///
/// The surrounding ASCII record-separator bytes keep it from colliding with
/// hashes or other zero runs that show up in real commit messages.
pub const COMMIT_SENTINEL: &str = "\u{1e}00000000000000000000000000000000000\u{1e}";

/// `--pretty` argument that prefixes each raw body with [`COMMIT_SENTINEL`].
pub fn log_format_arg() -> String {
    format!("--pretty=tformat:{}%B", COMMIT_SENTINEL)
}

/// Split raw `git log` output into one message per commit.
///
/// The segment before the first sentinel is discarded. Each remaining
/// segment loses git's record terminator and the body's final newline;
/// interior newlines are kept, and an empty message yields `""`.
pub fn split_commit_log(raw: &str) -> Vec<String> {
    raw.split(COMMIT_SENTINEL)
        .skip(1)
        .map(|segment| strip_newline(strip_newline(segment)).to_string())
        .collect()
}

fn strip_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}
