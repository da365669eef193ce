//! Implements the RepoHost trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use url::Url;

use crate::{
    error::{Result, ShipfolderError},
    remote::{
        config::{REPO_CREATION_FALLBACK, RemoteConfig, message_or},
        github::types::{GithubRepo, PutContents},
        traits::RepoHost,
        types::{CreateRepoRequest, UploadFileRequest},
    },
    types::RepoIdentity,
};

mod types;

/// GitHub repository host using Octocrab for API interactions.
pub struct Github {
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.trimmed_base_url().to_string();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self { base_uri, instance })
    }
}

/// Build the contents endpoint for a file, percent-encoding each segment of
/// the repository path.
pub fn contents_url(
    base_uri: &str,
    owner: &str,
    repo: &str,
    path: &str,
) -> Result<Url> {
    let mut url = Url::parse(base_uri)?;
    url.path_segments_mut()
        .map_err(|_| {
            ShipfolderError::invalid_config(format!(
                "GitHub API url cannot be a base: {base_uri}"
            ))
        })?
        .pop_if_empty()
        .extend(["repos", owner, repo, "contents"])
        .extend(path.split('/'));
    Ok(url)
}

#[async_trait]
impl RepoHost for Github {
    async fn create_repository(
        &self,
        req: CreateRepoRequest,
    ) -> Result<RepoIdentity> {
        let endpoint = format!("{}/user/repos", self.base_uri);

        info!("creating repository {}", req.name);

        let result: std::result::Result<GithubRepo, octocrab::Error> =
            self.instance.post(endpoint, Some(&req)).await;

        match result {
            Ok(repo) => {
                info!("created repository {}", repo.full_name);
                Ok(RepoIdentity {
                    owner: repo.owner.login,
                    full_name: repo.full_name,
                    html_url: repo.html_url,
                })
            }
            Err(octocrab::Error::GitHub { source, .. }) => {
                Err(ShipfolderError::repo_creation(message_or(
                    Some(source.message.as_str()),
                    REPO_CREATION_FALLBACK,
                )))
            }
            // the host answered with a body that is not a GitHub error
            Err(
                err @ (octocrab::Error::Serde { .. }
                | octocrab::Error::Json { .. }),
            ) => {
                debug!("unreadable repository creation response: {err}");
                Err(ShipfolderError::repo_creation(REPO_CREATION_FALLBACK))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn upload_file(&self, req: UploadFileRequest) -> Result<()> {
        let url =
            contents_url(&self.base_uri, &req.owner, &req.repo, &req.path)?;

        let body = PutContents {
            message: &req.message,
            content: &req.content,
        };

        let result: std::result::Result<serde_json::Value, octocrab::Error> =
            self.instance.put(url.as_str(), Some(&body)).await;

        if let Err(err) = result {
            error!("upload of {} rejected: {err}", req.path);
            return Err(ShipfolderError::file_upload(req.path));
        }

        Ok(())
    }

    async fn check_auth(&self) -> bool {
        match self.instance.current().user().await {
            Ok(user) => {
                debug!("authenticated with GitHub as {}", user.login);
                true
            }
            Err(err) => {
                debug!("GitHub authentication check failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Starts a local server answering every request with `status` and
    /// `body`. Serves repeatedly since the client retries server errors.
    async fn mock_server(
        status: u16,
        content_type: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");

        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let _ = stream.read(&mut buf).await;

                let resp = format!(
                    "HTTP/1.1 {status} Error\r\n\
                     Content-Type: {content_type}\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, handle)
    }

    fn create_request() -> CreateRepoRequest {
        CreateRepoRequest {
            name: "site".into(),
            description: String::new(),
            private: false,
            auto_init: true,
        }
    }

    #[tokio::test]
    async fn non_json_creation_error_uses_fallback_message() {
        let (url, handle) =
            mock_server(502, "text/html", "<html>bad gateway</html>").await;
        let github = Github::new(RemoteConfig::new(
            url,
            SecretString::from("token".to_string()),
        ))
        .unwrap();

        let err = github.create_repository(create_request()).await.unwrap_err();

        assert!(
            matches!(err, ShipfolderError::RepoCreation(_)),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.to_string(), REPO_CREATION_FALLBACK);
        handle.abort();
    }

    #[tokio::test]
    async fn creation_error_message_passes_through() {
        let (url, handle) = mock_server(
            422,
            "application/json",
            r#"{"message":"name already exists on this account"}"#,
        )
        .await;
        let github = Github::new(RemoteConfig::new(
            url,
            SecretString::from("token".to_string()),
        ))
        .unwrap();

        let err = github.create_repository(create_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "name already exists on this account");
        handle.abort();
    }

    #[test]
    fn builds_contents_url() {
        let url = contents_url(
            "https://api.github.com",
            "octo",
            "site",
            "src/index.js",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octo/site/contents/src/index.js"
        );
    }

    #[test]
    fn contents_url_keeps_enterprise_prefix() {
        let url = contents_url(
            "https://ghe.example.com/api/v3",
            "team",
            "docs",
            "README.md",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/team/docs/contents/README.md"
        );
    }

    #[test]
    fn contents_url_encodes_segments() {
        let url = contents_url(
            "https://api.github.com",
            "octo",
            "site",
            "assets/my image.png",
        )
        .unwrap();
        assert!(url.as_str().ends_with("/contents/assets/my%20image.png"));
    }

    #[test]
    fn repo_response_deserializes() {
        let body = serde_json::json!({
            "id": 1,
            "owner": {"login": "octo", "id": 2},
            "full_name": "octo/site",
            "html_url": "https://github.com/octo/site",
            "private": false
        });
        let repo: GithubRepo = serde_json::from_value(body).unwrap();
        assert_eq!(repo.owner.login, "octo");
        assert_eq!(repo.full_name, "octo/site");
    }

    #[tokio::test]
    async fn client_builds_from_config() {
        let config = RemoteConfig::new(
            "https://api.github.com/",
            SecretString::from("token".to_string()),
        );
        let github = Github::new(config).unwrap();
        assert_eq!(github.base_uri, "https://api.github.com");
    }
}
