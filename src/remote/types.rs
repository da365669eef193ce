use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of a repository creation request.
pub struct CreateRepoRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to create or update one file in a repository.
pub struct UploadFileRequest {
    pub owner: String,
    pub repo: String,
    /// Slash separated path relative to the repository root
    pub path: String,
    pub message: String,
    /// Transport envelope content, already base64 encoded
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Git repository a deployment is built from.
pub struct GitSource {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Body of a deployment creation request.
pub struct CreateDeploymentRequest {
    pub name: String,
    pub git_source: GitSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Accepted deployment. `url` is a bare host name without scheme.
pub struct DeploymentCreated {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_request_uses_platform_field_names() {
        let req = CreateDeploymentRequest {
            name: "site".into(),
            git_source: GitSource {
                kind: "github".into(),
                repo: "octo/site".into(),
                git_ref: "main".into(),
            },
        };

        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "site",
                "gitSource": {
                    "type": "github",
                    "repo": "octo/site",
                    "ref": "main"
                }
            })
        );
    }

    #[test]
    fn repo_request_serializes_auto_init() {
        let req = CreateRepoRequest {
            name: "site".into(),
            description: "".into(),
            private: true,
            auto_init: true,
        };

        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["private"], true);
        assert_eq!(value["auto_init"], true);
        assert_eq!(value["description"], "");
    }
}
