//! Client helper for the matching endpoint. The visitor's identity travels in
//! the bearer header attached at the transport layer, never in the query.

use crate::{
    app_lib::{get_json, AppError, Base},
    features::matching::types::{MatchCriteria, MatchJobsResponse},
};

/// Asks the engine for ranked recommendations against the stored resume.
pub async fn match_jobs(criteria: &MatchCriteria) -> Result<MatchJobsResponse, AppError> {
    let query = [
        (
            "desired_position",
            criteria.desired_position.trim().to_string(),
        ),
        (
            "desired_location",
            criteria.desired_location.trim().to_string(),
        ),
    ];

    get_json(Base::Api, "/api/job/match", &query).await
}
