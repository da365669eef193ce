//! Command execution for shipfolder.
//!
//! - **deploy**: walk a directory, then run the deployment pipeline
//! - **scan**: walk a directory and report what would be published
//! - **check**: probe both services with the resolved tokens
//! - **login** / **logout**: manage saved tokens
use crate::{
    cli::{Args, Command},
    error::Result,
};

/// Shared client construction and token resolution.
pub mod common;

/// Token validity probe against both services.
pub mod check;

/// Full publish-and-deploy run.
pub mod deploy;

/// Saving and removing stored tokens.
pub mod login;

/// Directory walk report.
pub mod scan;

/// Dispatch the parsed subcommand.
pub async fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Deploy(deploy_args) => {
            deploy::execute(args, deploy_args).await
        }
        Command::Scan { dir, files } => scan::execute(dir, *files),
        Command::Check => check::execute(args).await,
        Command::Login => login::login(args),
        Command::Logout => login::logout(),
    }
}
