use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::analytics::team_metrics;
use crate::reports::generate_team_console;
use chrono::{DateTime, Utc};
use clap::Parser;
use ohno::bail;

#[derive(Parser, Debug)]
pub struct TeamArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only count commits made at or after this time (RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub since: Option<DateTime<Utc>>,

    /// Only count commits made at or before this time (RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub until: Option<DateTime<Utc>>,
}

pub async fn process_team<H: Host>(host: &mut H, args: &TeamArgs) -> Result<()> {
    if let (Some(since), Some(until)) = (args.since, args.until) {
        if since > until {
            bail!("--since ({since}) must not be later than --until ({until})");
        }
    }

    let mut common = Common::new(host, &args.common)?;

    let team = team_metrics(
        &common.source,
        common.repository.owner(),
        common.repository.repo(),
        args.since,
        args.until,
        common.config.per_page,
    )
    .await?;

    common.report("team", &team, |repository, use_colors, output| {
        generate_team_console(repository, &team, use_colors, output)
    })
}
