//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::RepoConfig;

/// Global CLI arguments for credentials, configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    /// GitHub personal access token with repository scope. Falls back to the
    /// token saved by `login`.
    pub github_token: Option<String>,

    #[arg(long, global = true, env = "VERCEL_TOKEN", hide_env_values = true)]
    /// Vercel access token. Falls back to the token saved by `login`.
    pub vercel_token: Option<String>,

    #[arg(long, global = true)]
    /// Path to a config.toml overriding API urls, upload pacing and branch.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Log every remote call that would be made without making it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish a directory as a new GitHub repository and deploy it to Vercel.
    Deploy(DeployArgs),

    /// Walk a directory and report what would be published.
    Scan {
        /// Directory to scan.
        dir: PathBuf,

        #[arg(long, default_value_t = false)]
        /// List every file with its text/binary classification.
        files: bool,
    },

    /// Verify that both tokens are accepted by their services.
    Check,

    /// Save the GitHub and Vercel tokens for later runs.
    Login,

    /// Remove saved tokens.
    Logout,
}

/// Arguments for the deploy subcommand.
#[derive(clap::Args, Debug)]
pub struct DeployArgs {
    /// Directory to publish.
    pub dir: PathBuf,

    #[arg(long)]
    /// Repository name. Defaults to the directory name, lowercased with
    /// whitespace replaced by '-'.
    pub name: Option<String>,

    #[arg(long)]
    /// Repository description.
    pub description: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Create a private repository.
    pub private: bool,
}

impl DeployArgs {
    /// Repository settings for this run, using `suggested_name` when no
    /// name was given.
    pub fn repo_config(&self, suggested_name: &str) -> RepoConfig {
        let name = self
            .name
            .as_deref()
            .unwrap_or(suggested_name)
            .trim()
            .to_string();

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        RepoConfig {
            name,
            description,
            private: self.private,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deploy_command() {
        let args = Args::try_parse_from([
            "shipfolder",
            "deploy",
            "./site",
            "--name",
            "my-site",
            "--description",
            "Landing page",
            "--private",
            "--dry-run",
        ])
        .unwrap();

        assert!(args.dry_run);
        match args.command {
            Command::Deploy(deploy) => {
                assert_eq!(deploy.dir, PathBuf::from("./site"));
                let config = deploy.repo_config("ignored");
                assert_eq!(config.name, "my-site");
                assert_eq!(config.description.as_deref(), Some("Landing page"));
                assert!(config.private);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn deploy_name_defaults_to_suggestion() {
        let deploy = DeployArgs {
            dir: PathBuf::from("My Site"),
            name: None,
            description: Some("   ".into()),
            private: false,
        };

        let config = deploy.repo_config("my-site");

        assert_eq!(config.name, "my-site");
        assert!(config.description.is_none());
        assert!(!config.private);
    }

    #[test]
    fn parses_scan_command() {
        let args =
            Args::try_parse_from(["shipfolder", "scan", "dir", "--files"])
                .unwrap();
        assert!(matches!(args.command, Command::Scan { files: true, .. }));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args = Args::try_parse_from([
            "shipfolder",
            "login",
            "--github-token",
            "gh",
            "--vercel-token",
            "vc",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Login));
        assert_eq!(args.github_token.as_deref(), Some("gh"));
        assert_eq!(args.vercel_token.as_deref(), Some("vc"));
    }

    #[test]
    fn deploy_requires_directory() {
        assert!(Args::try_parse_from(["shipfolder", "deploy"]).is_err());
    }
}
