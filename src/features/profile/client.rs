//! Client helpers for the profile service: profile lookup and resume updates.
//! Updating the resume also triggers a fresh parse on the backend.

use crate::{
    app_lib::{get_json, put_json, AppError, Base},
    features::profile::types::{
        ProfileResponse, UpdateResumeRequest, UpdateResumeResponse, UserProfile,
    },
};

/// Fetches the signed-in visitor's profile, resume included.
pub async fn get_profile() -> Result<UserProfile, AppError> {
    let response: ProfileResponse = get_json(Base::Profile, "/api/user/profile", &[]).await?;
    Ok(response.user)
}

/// Replaces the stored resume text and returns the re-parsed analysis.
pub async fn update_resume(resume_text: String) -> Result<UpdateResumeResponse, AppError> {
    let request = UpdateResumeRequest { resume_text };
    let response: UpdateResumeResponse =
        put_json(Base::Profile, "/api/user/update_resume", &request).await?;
    if response.status != "ok" {
        return Err(AppError::Service(response.message));
    }
    Ok(response)
}
