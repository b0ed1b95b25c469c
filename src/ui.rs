//! Status output for humans.
//!
//! Everything here goes to stderr: stdout carries only the computed version so
//! that `$(next-tag)` works in shell scripts.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning)
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Summary of the tags considered for the next version.
///
/// Lists up to 10 matching tags, then a count of the remainder.
pub fn format_matched_tags(tags: &[String], pattern: &str) -> String {
    let mut out = format!(
        "\x1b[1m{} existing tag(s) match '{}'\x1b[0m",
        tags.len(),
        pattern
    );

    for tag in tags.iter().take(10) {
        out.push_str(&format!("\n  - {}", tag));
    }

    if tags.len() > 10 {
        out.push_str(&format!("\n  ... and {} more tags", tags.len() - 10));
    }
    out
}

pub fn display_matched_tags(tags: &[String], pattern: &str) {
    eprintln!("{}", format_matched_tags(tags, pattern));
}

/// Display the computed tag.
pub fn display_next_version(version: &str, release_candidate: bool) {
    let kind = if release_candidate {
        "Next release candidate"
    } else {
        "Next version"
    };
    eprintln!("\n\x1b[1m{}:\x1b[0m \x1b[32m{}\x1b[0m", kind, version);
}
