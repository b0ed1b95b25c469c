use std::fmt;

/// Non-fatal conditions met while gathering the inputs for the next tag.
/// These should be reported to the user, but the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A version file was configured but does not exist
    VersionFileMissing { path: String },
    /// The resolved format has no `${rev}` slot, so no existing tag can match
    MissingRevisionPlaceholder { format: String },
    /// Fetching tags from the remote failed; local tags are used instead
    FetchFailed { remote: String, reason: String },
    /// The tag filter pattern is not a valid regular expression
    InvalidFilterPattern { pattern: String },
    /// No existing tag matches the filter pattern
    NoMatchingTags { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::VersionFileMissing { path } => {
                write!(
                    f,
                    "Version file '{}' not found, using the current date",
                    path
                )
            }
            BoundaryWarning::MissingRevisionPlaceholder { format } => {
                write!(
                    f,
                    "Tag format '{}' has no ${{rev}} placeholder, revision is not tracked",
                    format
                )
            }
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::InvalidFilterPattern { pattern } => {
                write!(
                    f,
                    "Tag filter pattern '{}' is not a valid regular expression",
                    pattern
                )
            }
            BoundaryWarning::NoMatchingTags { pattern } => {
                write!(f, "No existing tags match '{}'", pattern)
            }
        }
    }
}
