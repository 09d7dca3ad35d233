use serde::{Deserialize, Serialize};
use strum::Display;

/// Issue or pull request state: open or closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}
