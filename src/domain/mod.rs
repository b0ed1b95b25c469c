//! Domain logic - pure tag format rules independent of git operations

pub mod format;
pub mod pattern;
pub mod version_override;

pub use format::{resolve_tag_format, resolve_tag_format_at};
pub use pattern::{release_candidate_pattern, revision_pattern, tag_filter_pattern};
pub use version_override::VersionOverride;

/// Placeholder replaced by the effective year
pub const YEAR_PLACEHOLDER: &str = "${year}";

/// Placeholder replaced by the effective two-digit month
pub const MONTH_PLACEHOLDER: &str = "${month}";

/// Placeholder marking the revision slot
pub const REV_PLACEHOLDER: &str = "${rev}";
