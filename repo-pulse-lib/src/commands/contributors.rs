use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::analytics::team_contributors;
use crate::reports::generate_contributors_console;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ContributorsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of leading contributors to show (default comes from the configuration)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub limit: Option<u16>,
}

pub async fn process_contributors<H: Host>(host: &mut H, args: &ContributorsArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let limit = args.limit.map_or(common.config.team_contributor_limit, usize::from);

    let members = team_contributors(
        &common.source,
        common.repository.owner(),
        common.repository.repo(),
        common.config.per_page,
        limit,
    )
    .await?;

    common.report("contributors", &members, |repository, use_colors, output| {
        generate_contributors_console(repository, &members, use_colors, output)
    })
}
