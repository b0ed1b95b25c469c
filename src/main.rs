use anyhow::Result;
use clap::{ArgAction, Parser};
use std::convert::Infallible;

use next_tag::cli::{run_next_tag_workflow, NextTagWorkflowArgs};
use next_tag::clock::SystemClock;
use next_tag::config::{self, Config};
use next_tag::git::Git2Repository;
use next_tag::output::{publish_output, VERSION_OUTPUT};
use next_tag::ui;

#[derive(clap::Parser, Debug)]
#[command(
    name = "next-tag",
    version,
    about = "Compute the next version tag from a format template and existing git tags"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "INPUT_TAG-FORMAT",
        help = "Tag format with ${year}, ${month} and ${rev} placeholders"
    )]
    tag_format: Option<String>,

    #[arg(
        long,
        env = "INPUT_VERSION-FILE",
        help = "JSON file overriding year and month"
    )]
    version_file: Option<String>,

    #[arg(
        long,
        env = "INPUT_RELEASE-CANDIDATE",
        action = ArgAction::SetTrue,
        value_parser = parse_action_flag,
        help = "Produce a release candidate tag (-rcN)"
    )]
    release_candidate: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(long, help = "Remote to fetch tags from")]
    remote: Option<String>,

    #[arg(long, help = "Use local tags only")]
    no_fetch: bool,

    #[arg(long, help = "Create the computed tag at HEAD")]
    create_tag: bool,

    #[arg(
        long,
        env = "GITHUB_OUTPUT",
        help = "File to append version=<tag> to"
    )]
    output_file: Option<String>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    /// Command-line values take precedence over the configuration file.
    fn workflow_args(&self, config: &Config) -> NextTagWorkflowArgs {
        let mut workflow_args = NextTagWorkflowArgs::from(config);

        if let Some(format) = non_empty(&self.tag_format) {
            workflow_args.tag_format = format.to_string();
        }
        if let Some(path) = non_empty(&self.version_file) {
            workflow_args.version_file = Some(path.to_string());
        }
        if let Some(remote) = non_empty(&self.remote) {
            workflow_args.remote = remote.to_string();
        }
        workflow_args.release_candidate |= self.release_candidate;
        workflow_args.create_tag |= self.create_tag;
        if self.no_fetch {
            workflow_args.fetch = false;
        }

        workflow_args
    }
}

/// Only the exact text `true` (after trimming) enables a flag, as the
/// workflow's `with:` inputs are plain strings.
fn parse_action_flag(value: &str) -> std::result::Result<bool, Infallible> {
    Ok(value.trim() == "true")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let workflow_args = args.workflow_args(&config);
    log::debug!("Workflow arguments: {:?}", workflow_args);

    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    if workflow_args.fetch {
        ui::display_status(&format!("Fetching tags from '{}'...", workflow_args.remote));
    }

    let result = match run_next_tag_workflow(&workflow_args, &repo, &SystemClock) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Failed to compute next version: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_matched_tags(&result.matched_tags, &result.filter_pattern);
    ui::display_next_version(&result.version, workflow_args.release_candidate);

    if result.created {
        ui::display_success(&format!("Created tag: {}", result.version));
    }

    if let Some(path) = non_empty(&args.output_file) {
        if let Err(e) = publish_output(path, VERSION_OUTPUT, &result.version) {
            ui::display_error(&format!("Failed to write output to '{}': {}", path, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Published {}={}", VERSION_OUTPUT, result.version));
    }

    println!("{}", result.version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_override_config() {
        let args = Args::try_parse_from([
            "next-tag",
            "--tag-format",
            "${year}.${rev}",
            "--release-candidate",
            "--remote",
            "upstream",
            "--no-fetch",
        ])
        .unwrap();

        let workflow_args = args.workflow_args(&Config::default());
        assert_eq!(workflow_args.tag_format, "${year}.${rev}");
        assert!(workflow_args.release_candidate);
        assert_eq!(workflow_args.remote, "upstream");
        assert!(!workflow_args.fetch);
        assert!(!workflow_args.create_tag);
    }

    #[test]
    fn test_blank_tag_format_keeps_config() {
        let args = Args::try_parse_from(["next-tag", "--tag-format", "  "]).unwrap();
        let mut config = Config::default();
        config.tag.format = "build-${rev}".to_string();

        assert_eq!(args.workflow_args(&config).tag_format, "build-${rev}");
    }

    #[test]
    fn test_parse_action_flag_accepts_only_true() {
        assert_eq!(parse_action_flag("true"), Ok(true));
        assert_eq!(parse_action_flag(" true\n"), Ok(true));
        for value in ["false", "yes", "1", "TRUE", "True", "on", ""] {
            assert_eq!(parse_action_flag(value), Ok(false), "{:?}", value);
        }
    }

    #[test]
    fn test_release_candidate_flag_still_sets_true() {
        let args = Args::try_parse_from(["next-tag", "--release-candidate"]).unwrap();
        assert!(args.release_candidate);
        let args = Args::try_parse_from(["next-tag"]).unwrap();
        assert!(!args.release_candidate);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some(" v${rev} ".to_string())), Some("v${rev}"));
    }
}
