//! `members`: sign up one account per configured name.

use super::{load_config, run_seed, rest_client};
use anyhow::Context;
use seed_generator::MemberGenerator;
use seed_populate_rest::{RestPopulateArgs, SignupRunner};

pub async fn run_members(args: RestPopulateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    config
        .validate_members()
        .context("Seed config cannot drive member signup")?;

    let seed = run_seed(&config)?;
    let members = MemberGenerator::new(&config.members, seed).generate();

    if args.common.dry_run {
        for member in &members {
            tracing::info!("[DRY-RUN] Would create {} ({})", member.email, member.full_name());
        }
        return Ok(());
    }

    let runner = SignupRunner::new(rest_client(&args.connection)?);
    let report = runner.run(&members).await;

    if report.without_id() > 0 {
        tracing::warn!(
            "{} of {} signups were accepted without a user id",
            report.without_id(),
            report.attempted()
        );
    }
    if report.failed() > 0 {
        tracing::warn!("{} of {} signups failed", report.failed(), report.attempted());
    }
    Ok(())
}
