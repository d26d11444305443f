//! Client helpers for the postings endpoints. These functions keep endpoint
//! paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{get_json, post_json, AppError, Base},
    features::jobs::types::{CreateJobRequest, CreateJobResponse, Job, JobDetailResponse, JobListResponse},
};

/// Search filters and page selection for the listing endpoint. Empty filters
/// are omitted from the query string.
#[derive(Clone, Debug, Default)]
pub struct JobQuery {
    pub job_title: String,
    pub location: String,
    pub page: u32,
    pub per_page: u32,
}

/// Fetches one page of postings, optionally filtered by title and location.
pub async fn list_jobs(query: &JobQuery) -> Result<JobListResponse, AppError> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if !query.job_title.trim().is_empty() {
        params.push(("job_title", query.job_title.trim().to_string()));
    }
    if !query.location.trim().is_empty() {
        params.push(("location", query.location.trim().to_string()));
    }
    if query.page > 0 {
        params.push(("page", query.page.to_string()));
    }
    if query.per_page > 0 {
        params.push(("per_page", query.per_page.to_string()));
    }

    get_json(Base::Api, "/api/job", &params).await
}

/// Fetches a single posting by id.
pub async fn get_job(id: i64) -> Result<Job, AppError> {
    let response: JobDetailResponse = get_json(Base::Api, &format!("/api/job/{id}"), &[]).await?;
    Ok(response.job)
}

/// Submits raw description text; the backend parses it into a posting.
pub async fn create_job(raw_jd_text: String) -> Result<CreateJobResponse, AppError> {
    let request = CreateJobRequest { raw_jd_text };
    let response: CreateJobResponse =
        post_json(Base::Api, "/api/job/admin/create_job", &request).await?;
    if response.status != "ok" {
        return Err(AppError::Service(response.message));
    }
    Ok(response)
}
