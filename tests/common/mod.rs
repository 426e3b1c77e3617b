//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tagscout::RepoInspector;

/// A test git repository builder for integration tests.
///
/// Fixtures are written with git2; the code under test reads them through
/// the git CLI.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Inspector pointed at this repository.
    pub fn inspector(&self) -> RepoInspector {
        RepoInspector::new(self.path())
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write `content` to `file`, stage it and commit with `message`.
    pub fn commit_file(&self, file: &str, content: &str, message: &str) -> Oid {
        let sig = self.signature();

        std::fs::write(self.path().join(file), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(file)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("clock before epoch")
                .as_nanos()
        );
        self.commit_file("test.txt", &content, message)
    }

    /// Create a lightweight tag on HEAD.
    pub fn tag(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Failed to create lightweight tag");
    }

    /// Create an annotated tag on HEAD.
    pub fn tag_annotated(&self, name: &str, message: &str) {
        let sig = self.signature();
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .expect("Failed to create annotated tag");
    }

    /// Point `remote.origin.url` at `url`.
    pub fn set_origin(&self, url: &str) {
        self.repo
            .config()
            .expect("Failed to open repo config")
            .set_str("remote.origin.url", url)
            .expect("Failed to set origin url");
    }
}
