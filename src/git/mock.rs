use crate::error::{NextTagError, Result};
use crate::git::TagSource;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: RefCell<BTreeSet<String>>,
    remote_tags: BTreeSet<String>,
    fetch_error: Option<String>,
    fetched: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(BTreeSet::new()),
            remote_tags: BTreeSet::new(),
            fetch_error: None,
            fetched: RefCell::new(Vec::new()),
        }
    }

    /// Create a mock repository holding the given local tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for tag in tags {
            repo.tags.borrow_mut().insert(tag.into());
        }
        repo
    }

    /// Add a tag that only becomes visible after a fetch
    pub fn add_remote_tag(&mut self, name: impl Into<String>) {
        self.remote_tags.insert(name.into());
    }

    /// Make every fetch fail with the given message
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// Remotes fetched so far, in call order
    pub fn fetched_remotes(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.borrow().contains(name)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockRepository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.fetched.borrow_mut().push(remote.to_string());
        if let Some(message) = &self.fetch_error {
            return Err(NextTagError::remote(message.clone()));
        }
        self.tags
            .borrow_mut()
            .extend(self.remote_tags.iter().cloned());
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().iter().cloned().collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if !self.tags.borrow_mut().insert(name.to_string()) {
            return Err(NextTagError::tag(format!("Tag '{}' already exists", name)));
        }
        Ok(())
    }
}
