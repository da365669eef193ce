//! Deploy command implementation.
use log::*;

use crate::{
    cli::{Args, DeployArgs},
    command::common,
    config::Config,
    error::Result,
    pipeline::Pipeline,
    walker::{ScanSummary, walk},
};

/// Walk the selected directory, then publish and deploy it.
///
/// A traversal failure aborts before any pipeline is started.
pub async fn execute(args: &Args, deploy_args: &DeployArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    info!("reading {}", deploy_args.dir.display());
    let files = walk(&deploy_args.dir)?;
    let summary = ScanSummary::new(&deploy_args.dir, &files);
    info!("{}: {} files", summary.folder_name, summary.file_count);

    let repo_config = deploy_args.repo_config(&summary.suggested_name);

    let tokens = common::tokens(args)?;
    let (publisher, trigger) = common::clients(&config, &tokens, args.dry_run)?;

    let mut pipeline = Pipeline::builder()
        .publisher(publisher)
        .trigger(trigger)
        .build()?;

    pipeline.subscribe(|event| {
        info!("[{:>3.0}%] {} {}", event.percent, event.title, event.message)
    });

    let outcome = pipeline.run(&repo_config, &files).await?;

    println!("Repository: {}", outcome.repository.html_url);
    println!("Deployment: {}", outcome.deployment.url);

    Ok(())
}
