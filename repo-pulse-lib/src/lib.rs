#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for repo-pulse
//!
//! This library derives project-health and team-performance metrics from the
//! records exposed by a source-code hosting API.
//!
//! # Module Organization
//!
//! - [`records`]: Typed records as returned by the hosting API
//! - [`metrics`]: Record classifiers and metric calculators
//! - [`facts`]: The data-fetching capability and its GitHub implementation
//! - [`analytics`]: Orchestration of fetches and calculations
//! - [`commands`]: Command-line interface
//! - [`reports`]: Console and JSON output

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analytics;
pub mod facts;
pub mod metrics;
pub mod records;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
