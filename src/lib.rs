pub mod boundary;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod ui;
pub mod version;

pub use domain::{resolve_tag_format, resolve_tag_format_at, VersionOverride};
pub use error::{NextTagError, Result};
pub use version::next_version;
