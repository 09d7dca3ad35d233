//! Command dispatch logic for repo-pulse

use super::{ContributorsArgs, HealthArgs, InitArgs, TeamArgs, init_config, process_contributors, process_health, process_team};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "repo-pulse", version, author, long_about = None)]
#[command(about = "Measure the health of GitHub repositories and the teams behind them")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: PulseSubcommand,
}

#[derive(Subcommand, Debug)]
enum PulseSubcommand {
    /// Score the health of a repository and raise alerts
    Health(Box<HealthArgs>),
    /// Summarize the activity of a repository's team
    Team(Box<TeamArgs>),
    /// List the leading contributors of a repository
    Contributors(Box<ContributorsArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        PulseSubcommand::Health(health_args) => process_health(host, health_args).await,
        PulseSubcommand::Team(team_args) => process_team(host, team_args).await,
        PulseSubcommand::Contributors(contributors_args) => process_contributors(host, contributors_args).await,
        PulseSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
