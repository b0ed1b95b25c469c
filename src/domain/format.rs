use super::{VersionOverride, MONTH_PLACEHOLDER, YEAR_PLACEHOLDER};
use crate::clock::{Clock, SystemClock};

/// Resolves `${year}` and `${month}` against the system date.
///
/// See [`resolve_tag_format_at`].
pub fn resolve_tag_format(tag_format: &str, version_override: Option<&VersionOverride>) -> String {
    resolve_tag_format_at(tag_format, version_override, &SystemClock)
}

/// Replaces the first `${year}` and the first `${month}` in `tag_format`.
///
/// Override fields win over the clock, each field on its own. The month is
/// left-padded with `0` to at least two characters. `${rev}` is left in place.
///
/// # Example
/// ```
/// # use next_tag::clock::FixedClock;
/// # use next_tag::domain::{resolve_tag_format_at, VersionOverride};
/// let clock = FixedClock::from_ym(2024, 1).unwrap();
/// let resolved = resolve_tag_format_at(
///     "${year}.${month}.${rev}",
///     Some(&VersionOverride::new(2023, 4)),
///     &clock,
/// );
/// assert_eq!(resolved, "2023.04.${rev}");
/// ```
pub fn resolve_tag_format_at<C: Clock + ?Sized>(
    tag_format: &str,
    version_override: Option<&VersionOverride>,
    clock: &C,
) -> String {
    let year = version_override
        .and_then(|o| o.year.clone())
        .unwrap_or_else(|| clock.year().to_string());
    let month = version_override
        .and_then(|o| o.month.clone())
        .unwrap_or_else(|| clock.month().to_string());

    tag_format
        .replacen(YEAR_PLACEHOLDER, &year, 1)
        .replacen(MONTH_PLACEHOLDER, &pad_month(&month), 1)
}

fn pad_month(month: &str) -> String {
    let fill = 2usize.saturating_sub(month.chars().count());
    format!("{}{}", "0".repeat(fill), month)
}
