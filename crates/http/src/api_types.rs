use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub schema: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}
