use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GithubOwner {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubRepo {
    pub owner: GithubOwner,
    pub full_name: String,
    pub html_url: String,
}

#[derive(Debug, Serialize)]
pub struct PutContents<'a> {
    pub message: &'a str,
    pub content: &'a str,
}
