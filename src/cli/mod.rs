//! Command-line entry points that sit between argument parsing and the core.

pub mod orchestration;

pub use orchestration::{run_next_tag_workflow, NextTagWorkflowArgs, WorkflowResult};
