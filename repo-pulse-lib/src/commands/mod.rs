//! Command-line interface and orchestration for repo-pulse
//!
//! This module implements the CLI commands and wires the GitHub source, the
//! analytics and the reports together.
//!
//! # Commands
//!
//! - **health**: Score a repository's health against the configured thresholds
//!   and list the raised alerts
//! - **team**: Count commits, pull requests and issues, and measure review coverage
//! - **contributors**: List the leading contributors with their profiles
//! - **init**: Generate a default configuration file
//!
//! The analysis commands share `common::CommonArgs` and `common::Common`, which
//! set up logging, load the configuration, build the `GithubSource` and route
//! the finished report either to the terminal or to a JSON file.

mod common;
mod config;
mod contributors;
mod health;
mod host;
mod init;
mod run;
mod team;

pub use contributors::{ContributorsArgs, process_contributors};
pub use health::{HealthArgs, process_health};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use team::{TeamArgs, process_team};
