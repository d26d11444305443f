//! Wire types for the postings service. The listing endpoint returns trimmed
//! summary records; the detail and create endpoints return the full posting.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Job {
    pub id: i64,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub raw_jd_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JobSummary {
    pub id: i64,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Pagination {
    pub total: u64,
    pub pages: u32,
    pub current_page: u32,
    pub per_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobListResponse {
    pub status: String,
    pub jobs: Vec<JobSummary>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobDetailResponse {
    pub status: String,
    pub job: Job,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateJobRequest {
    pub raw_jd_text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateJobResponse {
    pub status: String,
    pub job_id: i64,
    pub message: String,
    pub job: Job,
}
