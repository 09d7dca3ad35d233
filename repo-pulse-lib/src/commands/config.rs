use crate::Result;
use crate::analytics::{DEFAULT_TEAM_CONTRIBUTOR_LIMIT, Thresholds};
use crate::facts::GITHUB_API_URL;
use crate::metrics::MetricKind;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "repo-pulse.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the hosting API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Items requested per listing page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Number of contributors enriched with a user profile
    #[serde(default = "default_team_contributor_limit")]
    pub team_contributor_limit: usize,

    /// Hours within which a first response is considered healthy
    #[serde(default = "default_time_to_first_response_hours")]
    pub time_to_first_response_hours: f64,

    /// Hours within which merging a pull request is considered healthy
    #[serde(default = "default_pr_merge_time_hours")]
    pub pr_merge_time_hours: f64,

    /// Percentage of closed issues at or above which resolution is considered healthy
    #[serde(default = "default_issue_resolution_rate")]
    pub issue_resolution_rate: f64,

    /// Bus factor at or above which the project is considered healthy
    #[serde(default = "default_bus_factor")]
    pub bus_factor: f64,
}

fn default_api_base_url() -> String {
    GITHUB_API_URL.to_string()
}

const fn default_per_page() -> u32 {
    100
}

const fn default_team_contributor_limit() -> usize {
    DEFAULT_TEAM_CONTRIBUTOR_LIMIT
}

const fn default_time_to_first_response_hours() -> f64 {
    MetricKind::TimeToFirstResponse.default_threshold()
}

const fn default_pr_merge_time_hours() -> f64 {
    MetricKind::PrMergeTime.default_threshold()
}

const fn default_issue_resolution_rate() -> f64 {
    MetricKind::IssueResolutionRate.default_threshold()
}

const fn default_bus_factor() -> f64 {
    MetricKind::BusFactor.default_threshold()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `repo-pulse.toml` is looked up in `base_dir`
    /// and defaults are used when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading repo-pulse configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading repo-pulse configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config
            .validate()
            .into_app_err_with(|| format!("validating configuration file '{final_path}'"))?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The health thresholds carried by this configuration
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds {
            time_to_first_response_hours: self.time_to_first_response_hours,
            pr_merge_time_hours: self.pr_merge_time_hours,
            issue_resolution_rate: self.issue_resolution_rate,
            bus_factor: self.bus_factor,
        }
    }

    fn validate(&self) -> Result<()> {
        let _ = Url::parse(&self.api_base_url).into_app_err_with(|| format!("api_base_url '{}' is not a valid URL", self.api_base_url))?;

        if !(1..=100).contains(&self.per_page) {
            return Err(app_err!("per_page must be between 1 and 100, got {}", self.per_page));
        }

        if self.team_contributor_limit == 0 {
            return Err(app_err!("team_contributor_limit must be at least 1"));
        }

        if self.time_to_first_response_hours.is_nan() || self.time_to_first_response_hours <= 0.0 {
            return Err(app_err!(
                "time_to_first_response_hours must be greater than 0, got {}",
                self.time_to_first_response_hours
            ));
        }

        if self.pr_merge_time_hours.is_nan() || self.pr_merge_time_hours <= 0.0 {
            return Err(app_err!("pr_merge_time_hours must be greater than 0, got {}", self.pr_merge_time_hours));
        }

        if !(0.0..=100.0).contains(&self.issue_resolution_rate) {
            return Err(app_err!(
                "issue_resolution_rate must be between 0 and 100, got {}",
                self.issue_resolution_rate
            ));
        }

        if self.bus_factor.is_nan() || self.bus_factor < 1.0 {
            return Err(app_err!("bus_factor must be at least 1, got {}", self.bus_factor));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
