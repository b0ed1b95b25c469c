//! Main workflow orchestration logic
//!
//! This module contains the next-tag workflow, kept apart from CLI argument
//! parsing so it can run against any [TagSource] and [Clock].

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::{
    resolve_tag_format_at, tag_filter_pattern, VersionOverride, REV_PLACEHOLDER,
};
use crate::error::Result;
use crate::git::{filter_tags, TagSource};
use crate::version::next_version;

/// Arguments for the next-tag workflow
///
/// Mirrors the CLI Args after they have been merged with the configuration
/// file. This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct NextTagWorkflowArgs {
    /// Template with `${year}`, `${month}` and `${rev}` placeholders
    pub tag_format: String,

    /// Optional JSON file overriding year and month
    pub version_file: Option<String>,

    /// Produce a `-rcN` tag
    pub release_candidate: bool,

    /// Remote to fetch tags from
    pub remote: String,

    /// Fetch remote tags first
    pub fetch: bool,

    /// Create the computed tag locally
    pub create_tag: bool,
}

impl From<&Config> for NextTagWorkflowArgs {
    fn from(config: &Config) -> Self {
        NextTagWorkflowArgs {
            tag_format: config.tag.format.clone(),
            version_file: config.tag.version_file.clone(),
            release_candidate: config.tag.release_candidate,
            remote: config.git.remote.clone(),
            fetch: config.git.fetch,
            create_tag: config.git.create_tag,
        }
    }
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The computed tag
    pub version: String,

    /// Format after `${year}` and `${month}` substitution
    pub resolved_format: String,

    /// Pattern used to pre-filter the repository's tags
    pub filter_pattern: String,

    /// Tags that passed the filter
    pub matched_tags: Vec<String>,

    /// Whether the tag was created locally
    pub created: bool,

    /// Non-fatal conditions met along the way, in order
    pub warnings: Vec<BoundaryWarning>,
}

/// Main next-tag workflow
///
/// 1. Read the version override file, if one is configured and present
/// 2. Resolve `${year}` and `${month}` in the tag format
/// 3. Fetch tags from the remote (failure is a warning)
/// 4. List and filter the repository's tags
/// 5. Compute the next version
/// 6. Optionally create the tag at HEAD
///
/// # Arguments
///
/// * `args` - Workflow arguments
/// * `source` - Where tags are read from and created in
/// * `clock` - Date used when the override does not provide one
///
/// # Returns
///
/// The computed version and what led to it, or an error when the override
/// file is unreadable, tags cannot be listed, or tag creation fails.
pub fn run_next_tag_workflow<T, C>(
    args: &NextTagWorkflowArgs,
    source: &T,
    clock: &C,
) -> Result<WorkflowResult>
where
    T: TagSource + ?Sized,
    C: Clock + ?Sized,
{
    let mut warnings = Vec::new();

    let version_override = match args.version_file.as_deref() {
        Some(path) if Path::new(path).exists() => {
            let version_override = VersionOverride::from_file(path)?;
            log::info!("Version file content: {:?}", version_override);
            Some(version_override)
        }
        Some(path) if !path.is_empty() => {
            warnings.push(BoundaryWarning::VersionFileMissing {
                path: path.to_string(),
            });
            None
        }
        _ => None,
    };

    let resolved_format =
        resolve_tag_format_at(&args.tag_format, version_override.as_ref(), clock);
    log::debug!("Resolved tag format: {}", resolved_format);

    if !resolved_format.contains(REV_PLACEHOLDER) {
        warnings.push(BoundaryWarning::MissingRevisionPlaceholder {
            format: resolved_format.clone(),
        });
    }

    if args.fetch {
        if let Err(e) = source.fetch_tags(&args.remote) {
            warnings.push(BoundaryWarning::FetchFailed {
                remote: args.remote.clone(),
                reason: e.to_string(),
            });
        }
    }

    let filter_pattern = tag_filter_pattern(&resolved_format);
    log::debug!("Regex pattern: {}", filter_pattern);

    let matched_tags = match filter_tags(source.list_tags()?, &filter_pattern) {
        Ok(tags) => tags,
        Err(e) => {
            log::debug!("Filter pattern error: {}", e);
            warnings.push(BoundaryWarning::InvalidFilterPattern {
                pattern: filter_pattern.clone(),
            });
            Vec::new()
        }
    };
    log::debug!("Tags: {:?}", matched_tags);

    if matched_tags.is_empty() {
        warnings.push(BoundaryWarning::NoMatchingTags {
            pattern: filter_pattern.clone(),
        });
    }

    let version = next_version(&matched_tags, &resolved_format, args.release_candidate);
    log::info!("Next version: {}", version);

    if args.create_tag {
        source.create_tag(&version)?;
        log::info!("Created tag {}", version);
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    Ok(WorkflowResult {
        version,
        resolved_format,
        filter_pattern,
        matched_tags,
        created: args.create_tag,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::git::MockRepository;

    fn args(format: &str) -> NextTagWorkflowArgs {
        NextTagWorkflowArgs {
            tag_format: format.to_string(),
            fetch: false,
            ..NextTagWorkflowArgs::from(&Config::default())
        }
    }

    fn clock() -> FixedClock {
        FixedClock::from_ym(2024, 6).unwrap()
    }

    #[test]
    fn test_args_from_default_config() {
        let args = NextTagWorkflowArgs::from(&Config::default());
        assert_eq!(args.tag_format, "v${rev}");
        assert_eq!(args.remote, "origin");
        assert!(args.fetch);
        assert!(!args.create_tag);
    }

    #[test]
    fn test_workflow_uses_clock_and_tags() {
        let repo = MockRepository::with_tags(["2024.06.1", "2024.06.2", "2024.05.9"]);
        let result = run_next_tag_workflow(&args("${year}.${month}.${rev}"), &repo, &clock())
            .unwrap();

        assert_eq!(result.resolved_format, "2024.06.${rev}");
        assert_eq!(result.filter_pattern, r"2024.06.[0-9]+");
        assert_eq!(result.matched_tags.len(), 2);
        assert_eq!(result.version, "2024.06.3");
        assert!(result.warnings.is_empty());
        assert!(!result.created);
    }

    #[test]
    fn test_workflow_without_matches_starts_at_one() {
        let repo = MockRepository::with_tags(["unrelated"]);
        let result = run_next_tag_workflow(&args("v${rev}"), &repo, &clock()).unwrap();
        assert_eq!(result.version, "v1");
        assert_eq!(
            result.warnings,
            vec![BoundaryWarning::NoMatchingTags {
                pattern: r"v[0-9]+".to_string()
            }]
        );
    }

    #[test]
    fn test_workflow_missing_version_file_is_warning() {
        let repo = MockRepository::new();
        let mut a = args("${year}.${month}.${rev}");
        a.version_file = Some("/nonexistent/version.json".to_string());

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(result.version, "2024.06.1");
        assert!(matches!(
            result.warnings[0],
            BoundaryWarning::VersionFileMissing { .. }
        ));
    }

    #[test]
    fn test_workflow_fetch_failure_is_warning() {
        let mut repo = MockRepository::with_tags(["v4"]);
        repo.fail_fetch("network unreachable");
        let mut a = args("v${rev}");
        a.fetch = true;

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(result.version, "v5");
        assert_eq!(repo.fetched_remotes(), vec!["origin".to_string()]);
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, BoundaryWarning::FetchFailed { .. })));
    }

    #[test]
    fn test_workflow_fetch_brings_remote_tags() {
        let mut repo = MockRepository::with_tags(["v1"]);
        repo.add_remote_tag("v7");
        let mut a = args("v${rev}");
        a.fetch = true;

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(result.version, "v8");
    }

    #[test]
    fn test_workflow_release_candidate() {
        let repo = MockRepository::with_tags(["app-v1", "app-v2", "app-v3-rc1", "app-v3-rc2"]);
        let mut a = args("app-v${rev}");
        a.release_candidate = true;

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(result.version, "app-v3-rc3");
    }

    #[test]
    fn test_workflow_creates_tag() {
        let repo = MockRepository::with_tags(["v1"]);
        let mut a = args("v${rev}");
        a.create_tag = true;

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert!(result.created);
        assert!(repo.has_tag("v2"));
    }

    #[test]
    fn test_workflow_missing_rev_is_warning() {
        let repo = MockRepository::with_tags(["app-v2-rc1"]);
        let mut a = args("app-v2");
        a.release_candidate = true;

        let result = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(result.version, "app-v2-rc2");
        assert!(matches!(
            result.warnings[0],
            BoundaryWarning::MissingRevisionPlaceholder { .. }
        ));
    }

    #[test]
    fn test_workflow_invalid_filter_pattern() {
        let repo = MockRepository::with_tags(["v(1"]);
        let result = run_next_tag_workflow(&args("v(${rev}"), &repo, &clock()).unwrap();
        assert_eq!(result.version, "v(1");
        assert!(result.matched_tags.is_empty());
        assert!(result
            .warnings
            .contains(&BoundaryWarning::InvalidFilterPattern {
                pattern: r"v([0-9]+".to_string()
            }));
    }

    #[test]
    fn test_workflow_is_idempotent() {
        let repo = MockRepository::with_tags(["r1", "r2"]);
        let a = args("r${rev}");
        let first = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        let second = run_next_tag_workflow(&a, &repo, &clock()).unwrap();
        assert_eq!(first, second);
    }
}
