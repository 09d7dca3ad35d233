use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::analytics::project_health;
use crate::reports::generate_health_console;
use chrono::Utc;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct HealthArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with status code 1 if any critical health alert is raised
    #[arg(long)]
    pub error_if_critical: bool,
}

pub async fn process_health<H: Host>(host: &mut H, args: &HealthArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let thresholds = common.config.thresholds();

    let health = project_health(
        &common.source,
        common.repository.owner(),
        common.repository.repo(),
        common.config.per_page,
        &thresholds,
        Utc::now(),
    )
    .await?;

    common.report("health", &health, |repository, use_colors, output| {
        generate_health_console(repository, &health, use_colors, output)
    })?;

    if args.error_if_critical && health.has_critical_alerts() {
        let repository = common.repository.to_string();
        let host = common.host();
        let _ = writeln!(host.error(), "Critical health alerts were raised for {repository}");
        host.exit(1);
        return Err(ohno::AppError::new("one or more critical health alerts were raised"));
    }

    Ok(())
}
