//! Implements the DeployPlatform trait for Vercel
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    error::{Result, ShipfolderError},
    remote::{
        config::{DEPLOY_FALLBACK, RemoteConfig, message_or},
        traits::DeployPlatform,
        types::{CreateDeploymentRequest, DeploymentCreated},
        vercel::types::VercelErrorBody,
    },
};

mod types;

/// Vercel deploy platform using reqwest for API interactions.
pub struct Vercel {
    base_url: Url,
    client: Client,
}

impl Vercel {
    /// Create Vercel client with bearer token authentication.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let token_value =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())?;

        headers.append("Authorization", token_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url =
            Url::parse(&format!("{}/", config.trimmed_base_url()))?;

        Ok(Self { base_url, client })
    }
}

/// Extract the error message from a failed deployment response body.
pub fn deploy_error_message(body: &str) -> String {
    let parsed: VercelErrorBody =
        serde_json::from_str(body).unwrap_or_default();
    let message = parsed.error.and_then(|e| e.message);
    message_or(message.as_deref(), DEPLOY_FALLBACK)
}

#[async_trait]
impl DeployPlatform for Vercel {
    async fn create_deployment(
        &self,
        req: CreateDeploymentRequest,
    ) -> Result<DeploymentCreated> {
        let deployments_url = self.base_url.join("v13/deployments")?;

        info!("requesting deployment of {}", req.git_source.repo);

        let request = self.client.post(deployments_url).json(&req).build()?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!("deployment rejected with status {status}: {body}");
            return Err(ShipfolderError::deploy(deploy_error_message(&body)));
        }

        let created: DeploymentCreated = response.json().await?;

        info!("deployment accepted: {}", created.url);

        Ok(created)
    }

    async fn check_auth(&self) -> bool {
        let user_url = match self.base_url.join("v2/user") {
            Ok(url) => url,
            Err(err) => {
                debug!("invalid Vercel user url: {err}");
                return false;
            }
        };

        match self.client.get(user_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("Vercel authentication check failed: {err}");
                false
            }
        }
    }
}
