//! Git tag source abstraction layer
//!
//! This module provides a trait-based abstraction over the tag operations
//! next-tag needs, allowing for a real Git repository and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [TagSource] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use next_tag::git::{filter_tags, TagSource};
//! # fn example<T: TagSource>(source: &T) -> next_tag::Result<()> {
//! source.fetch_tags("origin")?;
//! let tags = filter_tags(source.list_tags()?, r"v1\.\d+").unwrap_or_default();
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use regex::Regex;

/// Tag operations needed to compute and record the next version
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::NextTagError] variants.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation
pub trait TagSource {
    /// Fetch all tags from a remote
    ///
    /// Updates local `refs/tags/*` from the remote's tags so that
    /// [TagSource::list_tags] sees tags created by other CI runs.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(())` - Tags were fetched
    /// * `Err` - If the remote doesn't exist or the fetch fails
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create a lightweight tag at the current HEAD
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, HEAD cannot be resolved, or a Git error occurs
    fn create_tag(&self, name: &str) -> Result<()>;
}

/// Keeps the tags in which `pattern` finds a match.
///
/// An empty pattern keeps every tag. Callers decide what a pattern that does
/// not compile means; the workflow treats it as "no tags".
pub fn filter_tags(
    tags: Vec<String>,
    pattern: &str,
) -> std::result::Result<Vec<String>, regex::Error> {
    if pattern.is_empty() {
        return Ok(tags);
    }

    let re = Regex::new(pattern)?;
    Ok(tags.into_iter().filter(|tag| re.is_match(tag)).collect())
}
