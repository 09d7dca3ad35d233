//! Processing shared by the analysis commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::facts::{Client, GithubSource, RepoSpec};
use crate::reports::generate_json;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use serde::Serialize;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "    common";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by the analysis commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Repository to analyze, as `owner/repo` or a repository URL
    #[arg(value_name = "REPO")]
    pub repository: String,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `repo-pulse.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Write the report to a JSON file instead of the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    pub source: GithubSource,
    pub repository: RepoSpec,
    host: &'a mut H,
    color: ColorMode,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, configuration and the GitHub source for one command
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is malformed, the configuration cannot
    /// be loaded, or the HTTP client cannot be built
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let repository: RepoSpec = args.repository.parse()?;
        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        log::debug!(target: LOG_TARGET, "Using API at {}", config.api_base_url);
        let client = Client::new(args.github_token.as_deref(), config.api_base_url.as_str(), Utc::now())?;

        Ok(Self {
            config,
            source: GithubSource::new(client),
            repository,
            host,
            color: args.color,
            json: args.json.clone(),
        })
    }

    pub const fn host(&mut self) -> &mut H {
        self.host
    }

    fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }

    /// Emit a report, to the JSON file when one was requested and to the host's output otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be generated or written
    pub fn report<T, F>(&mut self, section: &str, data: &T, console: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&str, bool, &mut String) -> Result<()>,
    {
        let repository = self.repository.to_string();

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(&repository, section, data, Utc::now(), &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
            log::info!(target: LOG_TARGET, "Wrote {section} report to '{filename}'");
            return Ok(());
        }

        let mut console_output = String::new();
        console(&repository, self.use_colors(), &mut console_output)?;
        let _ = write!(self.host.output(), "{console_output}");
        Ok(())
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a second command run in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
