use crate::records::Contributor;
use serde::{Deserialize, Serialize};
use strum::Display;

/// How exposed a project is to the loss of a few contributors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn from_critical_contributors(count: u32) -> Self {
        match count {
            5.. => Self::Low,
            3..=4 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// Contributor concentration risk for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusFactor {
    pub score: u32,
    pub critical_contributors: u32,
    pub risk_level: RiskLevel,
}

/// Count how many leading contributors account for 80% of all contributions.
///
/// Contributors are walked in the order given, which the API provides sorted by
/// contribution count; they are not re-sorted here. The count includes the
/// contributor whose contributions cross the threshold. An empty input gives a
/// score of zero and a high risk level.
#[must_use]
pub fn calculate_bus_factor(contributors: &[Contributor]) -> BusFactor {
    let total: u64 = contributors.iter().map(|c| c.contributions).sum();

    let mut running_total = 0_u64;
    let mut critical_contributors = 0_u32;

    for contributor in contributors {
        running_total += contributor.contributions;
        critical_contributors += 1;

        // running_total >= 80% of total, in exact integer arithmetic
        if u128::from(running_total) * 5 >= u128::from(total) * 4 {
            break;
        }
    }

    BusFactor {
        score: critical_contributors,
        critical_contributors,
        risk_level: RiskLevel::from_critical_contributors(critical_contributors),
    }
}
