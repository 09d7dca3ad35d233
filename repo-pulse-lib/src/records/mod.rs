//! Typed records returned by the hosting API
//!
//! These are read-only values. Only the fields the metrics need are modelled;
//! everything else in the API payload is ignored during deserialization.
//! Timestamps the API may omit are `Option`s so that partial records can be
//! excluded from aggregates instead of failing to parse.

mod commit;
mod contributor;
mod issue;
mod item_state;
mod pull_request;
mod repository;
mod review;
mod user;

pub use commit::{Commit, CommitAuthor, CommitDetail};
pub use contributor::Contributor;
pub use issue::{Issue, PullRequestRef};
pub use item_state::ItemState;
pub use pull_request::PullRequest;
pub use repository::Repository;
pub use review::Review;
pub use user::User;
