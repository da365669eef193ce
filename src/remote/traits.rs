//! Traits for the remote services used by a deployment.
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    remote::types::{
        CreateDeploymentRequest, CreateRepoRequest, DeploymentCreated,
        UploadFileRequest,
    },
    types::RepoIdentity,
};

/// A source-control host able to create and populate repositories.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// Create a repository owned by the authenticated account.
    async fn create_repository(
        &self,
        req: CreateRepoRequest,
    ) -> Result<RepoIdentity>;
    /// Create or update a single file in a repository.
    async fn upload_file(&self, req: UploadFileRequest) -> Result<()>;
    /// Whether the configured token is accepted by the host.
    async fn check_auth(&self) -> bool;
}

/// A hosting platform able to build and deploy a repository.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeployPlatform: Send + Sync {
    async fn create_deployment(
        &self,
        req: CreateDeploymentRequest,
    ) -> Result<DeploymentCreated>;
    async fn check_auth(&self) -> bool;
}
