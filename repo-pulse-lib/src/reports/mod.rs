//! Report generation for computed metrics
//!
//! Two formats are provided:
//! - **Console**: aligned, optionally colored text for a terminal
//! - **JSON**: machine-readable documents built from the serde representation
//!   of the analytics results
//!
//! Generators write to any `core::fmt::Write`, so callers decide whether the
//! text goes to the host's output or to a file.

mod console;
mod json;

pub use console::{generate_contributors as generate_contributors_console, generate_health as generate_health_console, generate_team as generate_team_console};
pub use json::generate as generate_json;
