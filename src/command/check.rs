//! Check command implementation.
use log::*;

use crate::{
    cli::Args,
    command::common,
    config::Config,
    error::{Result, ShipfolderError},
};

fn status(connected: bool) -> &'static str {
    if connected { "Connected" } else { "Invalid token" }
}

/// Probe both services and fail unless both accept their token.
pub async fn execute(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let tokens = common::tokens(args)?;
    let (publisher, trigger) = common::clients(&config, &tokens, false)?;

    let github = publisher.check_auth().await;
    let vercel = trigger.check_auth().await;

    info!("GitHub: {}", status(github));
    info!("Vercel: {}", status(vercel));

    if !github || !vercel {
        return Err(ShipfolderError::AuthenticationError(
            "Invalid tokens. Please update your tokens.".into(),
        ));
    }

    Ok(())
}
