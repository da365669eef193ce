//! Common functionality shared between commands
use log::*;
use secrecy::SecretString;

use crate::{
    cli::Args,
    config::Config,
    credentials::{FileTokenStore, resolve_tokens},
    deployer::DeployTrigger,
    error::Result,
    publisher::Publisher,
    remote::{config::RemoteConfig, github::Github, vercel::Vercel},
    types::TokenPair,
};

/// Resolve tokens from flags, environment and the token store.
///
/// Dry runs never contact either service, so missing tokens are replaced
/// with empty placeholders instead of failing.
pub fn tokens(args: &Args) -> Result<TokenPair> {
    let store = FileTokenStore::default_location()?;
    let resolved = resolve_tokens(
        args.github_token.clone(),
        args.vercel_token.clone(),
        &store,
    );

    match resolved {
        Ok(tokens) => Ok(tokens),
        Err(err) if args.dry_run => {
            warn!("dry_run: continuing without tokens: {err}");
            Ok(TokenPair {
                github: SecretString::from(String::new()),
                vercel: SecretString::from(String::new()),
            })
        }
        Err(err) => Err(err),
    }
}

/// Build the publisher and deploy trigger for one run.
pub fn clients(
    config: &Config,
    tokens: &TokenPair,
    dry_run: bool,
) -> Result<(Publisher, DeployTrigger)> {
    let github = Github::new(RemoteConfig::new(
        config.github_api_url.clone(),
        tokens.github.clone(),
    ))?;

    let vercel = Vercel::new(RemoteConfig::new(
        config.vercel_api_url.clone(),
        tokens.vercel.clone(),
    ))?;

    let publisher =
        Publisher::new(Box::new(github), config.upload_delay(), dry_run);
    let trigger = DeployTrigger::new(
        Box::new(vercel),
        config.deploy_branch.clone(),
        dry_run,
    );

    Ok((publisher, trigger))
}
