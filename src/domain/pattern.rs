//! Regular expressions derived from a resolved tag format.
//!
//! The format text is used almost verbatim as a regular expression: only `.`
//! is escaped (and only for the revision pattern). Other metacharacters keep
//! their regex meaning. A format that does not compile yields `None`, which
//! callers treat as "no tag matches".

use super::REV_PLACEHOLDER;
use regex::Regex;

const REVISION_GROUP: &str = r"([0-9]+)";
const REVISION_DIGITS: &str = r"[0-9]+";

/// Source text of the revision pattern for `resolved_format`.
///
/// The first `${rev}` becomes a digit capture group, every `.` is escaped and
/// the pattern is anchored at the end of the tag.
pub fn revision_pattern_source(resolved_format: &str) -> String {
    let with_group = resolved_format.replacen(REV_PLACEHOLDER, REVISION_GROUP, 1);
    format!("{}$", with_group.replace('.', r"\."))
}

/// Compiles the revision pattern for `resolved_format`.
///
/// # Example
/// ```
/// # use next_tag::domain::revision_pattern;
/// let re = revision_pattern("v1.0.${rev}").unwrap();
/// assert_eq!(&re.captures("v1.0.07").unwrap()[1], "07");
/// assert!(!re.is_match("v1x0x7"));
/// ```
pub fn revision_pattern(resolved_format: &str) -> Option<Regex> {
    compile(&revision_pattern_source(resolved_format))
}

/// Compiles `"<next_tag>-rc([0-9]+)"`.
///
/// `next_tag` is not escaped, so a `.` in it matches any character, and the
/// pattern may match anywhere in a tag.
pub fn release_candidate_pattern(next_tag: &str) -> Option<Regex> {
    compile(&format!("{}-rc{}", next_tag, REVISION_GROUP))
}

/// Pattern source used to pre-filter listed tags: the first `${rev}` becomes
/// `[0-9]+`, nothing else changes.
pub fn tag_filter_pattern(resolved_format: &str) -> String {
    resolved_format.replacen(REV_PLACEHOLDER, REVISION_DIGITS, 1)
}

fn compile(source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(e) => {
            log::debug!("Pattern '{}' does not compile: {}", source, e);
            None
        }
    }
}
