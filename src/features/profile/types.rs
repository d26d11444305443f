//! Wire types for the profile service.

use crate::features::profile::analysis::AnalysisNode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_parsed_data: Option<AnalysisNode>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    pub status: String,
    pub user: UserProfile,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateResumeRequest {
    pub resume_text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateResumeResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub parsed_data: Option<AnalysisNode>,
}
