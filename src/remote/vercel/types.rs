use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct VercelErrorDetail {
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VercelErrorBody {
    pub error: Option<VercelErrorDetail>,
}
