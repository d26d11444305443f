//! Types for the matching journey: the criteria the visitor supplies, the
//! recommendation records the engine returns, and the phase the workflow is
//! in. Recommendation order comes from the engine and is never re-sorted
//! locally.

use crate::features::jobs::types::Job;
use serde::Deserialize;

/// What the visitor is looking for. Both fields must be non-empty before a
/// request may be issued.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchCriteria {
    pub desired_position: String,
    pub desired_location: String,
}

/// One ranked recommendation. `job_details` is a denormalized snapshot and
/// can be missing when the engine references a posting outside the shortlist.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JobRecommendation {
    pub job_id: i64,
    pub match_score: f64,
    pub match_analysis: String,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub job_details: Option<Job>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MatchJobsResponse {
    pub status: String,
    #[serde(default)]
    pub recommendations: Vec<JobRecommendation>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Where the matching journey currently stands. `Loaded` with zero items is
/// the "no matches" outcome, distinct from `Failed`.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchPhase {
    Idle,
    Loading,
    Loaded(Vec<JobRecommendation>),
    Failed(String),
}

impl MatchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, MatchPhase::Loading)
    }
}
