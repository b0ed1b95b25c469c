use crate::domain::{release_candidate_pattern, revision_pattern, REV_PLACEHOLDER};
use regex::Regex;

/// Revision used when no existing tag matches the format.
pub const INITIAL_REVISION: u64 = 1;

/// Computes the next tag for `resolved_format` given the existing `tags`.
///
/// The highest revision found among tags matching the format is incremented
/// and substituted for the first `${rev}`. When `release_candidate` is set,
/// `-rcN` is appended where `N` is one past the highest release candidate
/// already tagged for that next revision.
///
/// A tag with revision `0` counts the same as no match at all, and a format
/// without `${rev}` never matches any tag. Neither case is an error.
///
/// # Arguments
/// * `tags` - Existing tag names, in any order
/// * `resolved_format` - Tag format with `${year}`/`${month}` already resolved
/// * `release_candidate` - Whether to produce a release candidate tag
///
/// # Example
/// ```
/// # use next_tag::version::next_version;
/// let tags = ["app-v1", "app-v2", "app-v3-rc1", "app-v3-rc2"];
/// assert_eq!(next_version(&tags, "app-v${rev}", false), "app-v3");
/// assert_eq!(next_version(&tags, "app-v${rev}", true), "app-v3-rc3");
/// ```
pub fn next_version<S: AsRef<str>>(
    tags: &[S],
    resolved_format: &str,
    release_candidate: bool,
) -> String {
    if tags.is_empty() {
        let initial = substitute_revision(resolved_format, INITIAL_REVISION);
        return if release_candidate {
            format!("{}-rc{}", initial, INITIAL_REVISION)
        } else {
            initial
        };
    }

    let highest_revision = revision_pattern(resolved_format)
        .map(|re| highest_capture(tags, &re))
        .unwrap_or(0);
    let next_revision = highest_revision.saturating_add(1);
    let next_version_tag = substitute_revision(resolved_format, next_revision);

    if !release_candidate {
        return next_version_tag;
    }

    let highest_rc = release_candidate_pattern(&next_version_tag)
        .map(|re| highest_capture(tags, &re))
        .unwrap_or(0);

    format!("{}-rc{}", next_version_tag, highest_rc.saturating_add(1))
}

/// Replaces the first `${rev}` with `revision`, without padding.
pub fn substitute_revision(resolved_format: &str, revision: u64) -> String {
    resolved_format.replacen(REV_PLACEHOLDER, &revision.to_string(), 1)
}

/// Largest number captured by the first group of `re` across `tags`, or 0.
///
/// Tags that do not match, or whose capture is missing or does not fit in a
/// `u64`, are skipped.
fn highest_capture<S: AsRef<str>>(tags: &[S], re: &Regex) -> u64 {
    tags.iter()
        .filter_map(|tag| re.captures(tag.as_ref()))
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}
