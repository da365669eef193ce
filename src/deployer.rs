//! Requests a deployment of a freshly published repository.
//!
//! "Deployed" means the platform accepted the request; build completion is
//! never polled.
use log::*;

use crate::{
    error::Result,
    remote::{
        traits::DeployPlatform,
        types::{CreateDeploymentRequest, GitSource},
    },
    types::DeployResult,
};

/// Git source kind understood by the deploy platform.
pub const GIT_SOURCE_KIND: &str = "github";

pub struct DeployTrigger {
    platform: Box<dyn DeployPlatform>,
    branch: String,
    dry_run: bool,
}

impl DeployTrigger {
    pub fn new(
        platform: Box<dyn DeployPlatform>,
        branch: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            platform,
            branch: branch.into(),
            dry_run,
        }
    }

    pub async fn check_auth(&self) -> bool {
        self.platform.check_auth().await
    }

    /// Request a deployment of `repo_full_name` (`owner/name`) from the
    /// configured branch.
    pub async fn deploy(&self, repo_full_name: &str) -> Result<DeployResult> {
        let req = deployment_request(repo_full_name, &self.branch);

        if self.dry_run {
            warn!("dry_run: would request deployment: req: {:#?}", req);
            return Ok(DeployResult {
                url: format!("https://{}.vercel.app", req.name),
            });
        }

        let created = self.platform.create_deployment(req).await?;

        Ok(DeployResult {
            url: format!("https://{}", created.url),
        })
    }
}

/// Build the deployment body; the project is named after the repository.
pub fn deployment_request(
    repo_full_name: &str,
    branch: &str,
) -> CreateDeploymentRequest {
    let name = repo_full_name
        .split_once('/')
        .map(|(_, name)| name)
        .unwrap_or(repo_full_name);

    CreateDeploymentRequest {
        name: name.to_string(),
        git_source: GitSource {
            kind: GIT_SOURCE_KIND.into(),
            repo: repo_full_name.to_string(),
            git_ref: branch.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ShipfolderError,
        remote::{traits::MockDeployPlatform, types::DeploymentCreated},
    };

    #[test]
    fn request_references_repo_and_branch() {
        let req = deployment_request("octo/site", "main");
        assert_eq!(req.name, "site");
        assert_eq!(req.git_source.kind, "github");
        assert_eq!(req.git_source.repo, "octo/site");
        assert_eq!(req.git_source.git_ref, "main");
    }

    #[tokio::test]
    async fn deploy_builds_https_url_from_host() {
        let mut platform = MockDeployPlatform::new();
        platform
            .expect_create_deployment()
            .times(1)
            .withf(|req| req.git_source.repo == "octo/site")
            .returning(|_| {
                Ok(DeploymentCreated {
                    url: "site-abc123.vercel.app".into(),
                })
            });

        let trigger = DeployTrigger::new(Box::new(platform), "main", false);
        let result = trigger.deploy("octo/site").await.unwrap();

        assert_eq!(result.url, "https://site-abc123.vercel.app");
    }

    #[tokio::test]
    async fn deploy_error_passes_through() {
        let mut platform = MockDeployPlatform::new();
        platform
            .expect_create_deployment()
            .times(1)
            .returning(|_| {
                Err(ShipfolderError::deploy("Repository not linked"))
            });

        let trigger = DeployTrigger::new(Box::new(platform), "main", false);
        let err = trigger.deploy("octo/site").await.unwrap_err();

        assert!(matches!(err, ShipfolderError::Deploy(_)));
        assert_eq!(err.to_string(), "Repository not linked");
    }

    #[tokio::test]
    async fn dry_run_skips_platform() {
        let mut platform = MockDeployPlatform::new();
        platform.expect_create_deployment().times(0);

        let trigger = DeployTrigger::new(Box::new(platform), "main", true);
        let result = trigger.deploy("octo/site").await.unwrap();

        assert_eq!(result.url, "https://site.vercel.app");
    }
}
