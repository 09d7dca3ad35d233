//! Data fetching from the hosting platform
//!
//! The analytics never talk to the network directly. They take a
//! [`HostingSource`], which lists the records of a repository one page at a
//! time. [`GithubSource`] implements it over the GitHub REST API through a
//! [`Client`] that classifies every response as a success, a rate limit, a
//! missing resource or a failure. Tests substitute in-memory sources.

mod client;
mod github;
mod repo_spec;
mod source;

pub use client::{ApiOutcome, Client, RateLimit, rate_limit_from_headers};
pub use github::{GITHUB_API_URL, GithubSource};
pub use repo_spec::RepoSpec;
pub use source::{HostingSource, StateQuery};
