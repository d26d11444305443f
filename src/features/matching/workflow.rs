//! Matching workflow. One submission is one request cycle: validate locally,
//! tag the request with a sequence number, suspend on the network, then apply
//! the outcome only if no newer submission has been issued in the meantime.
//! There is no cancellation; superseded responses are simply discarded, so
//! rapid re-submissions always settle on the newest request's outcome.

use crate::app_lib::AppError;
use crate::features::matching::client;
use crate::features::matching::types::{MatchCriteria, MatchJobsResponse, MatchPhase};
use leptos::{prelude::*, task::spawn_local};

/// Local check run before any request. Both criteria fields are required.
pub fn check_criteria(criteria: &MatchCriteria) -> Result<(), String> {
    if criteria.desired_position.trim().is_empty() || criteria.desired_location.trim().is_empty() {
        return Err("Please enter both a desired position and a location.".to_string());
    }
    Ok(())
}

/// Phase for a response that reached us intact. A non-ok status in a 2xx body
/// is still a failure; an ok status with zero recommendations is not.
pub fn phase_for_response(response: MatchJobsResponse) -> MatchPhase {
    if response.status == "ok" {
        MatchPhase::Loaded(response.recommendations)
    } else {
        MatchPhase::Failed(
            response
                .message
                .unwrap_or_else(|| "Matching failed.".to_string()),
        )
    }
}

/// Phase for a failed exchange. The transport already extracted any
/// service-provided message, so the rendered text stays meaningful.
pub fn phase_for_error(error: &AppError) -> MatchPhase {
    MatchPhase::Failed(error.to_string())
}

/// Hands out request sequence numbers and decides which response may drive
/// the visible state. A response qualifies only while its request is still
/// the newest one issued, and each number qualifies at most once.
#[derive(Debug, Default)]
pub struct ResponseSequencer {
    issued: u64,
    applied: u64,
}

impl ResponseSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the next request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the response tagged `seq` may be applied. Marks it applied
    /// when it qualifies.
    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq == self.issued && seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

/// Reactive handle for the matching journey. Owns the phase signal the view
/// renders and the sequencer that keeps re-submissions deterministic.
#[derive(Clone, Copy)]
pub struct MatchWorkflow {
    pub phase: RwSignal<MatchPhase>,
    sequencer: StoredValue<ResponseSequencer>,
}

impl MatchWorkflow {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(MatchPhase::Idle),
            sequencer: StoredValue::new(ResponseSequencer::new()),
        }
    }

    /// Validates the criteria and, when they pass, issues one matching
    /// request. Invalid criteria are reported to the caller without issuing a
    /// request or touching the current phase, so the form can show the
    /// message next to the inputs.
    pub fn submit(&self, criteria: MatchCriteria) -> Result<(), String> {
        check_criteria(&criteria)?;

        let Some(seq) = self
            .sequencer
            .try_write_value()
            .map(|mut sequencer| sequencer.begin())
        else {
            return Ok(());
        };
        self.phase.set(MatchPhase::Loading);

        let phase = self.phase;
        let sequencer = self.sequencer;
        spawn_local(async move {
            let outcome = client::match_jobs(&criteria).await;
            let fresh = sequencer
                .try_write_value()
                .map(|mut sequencer| sequencer.try_apply(seq))
                .unwrap_or(false);
            if !fresh {
                return;
            }
            phase.set(match outcome {
                Ok(response) => phase_for_response(response),
                Err(error) => phase_for_error(&error),
            });
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{check_criteria, phase_for_response, ResponseSequencer};
    use crate::features::matching::types::{
        JobRecommendation, MatchCriteria, MatchJobsResponse, MatchPhase,
    };

    fn criteria(position: &str, location: &str) -> MatchCriteria {
        MatchCriteria {
            desired_position: position.to_string(),
            desired_location: location.to_string(),
        }
    }

    fn recommendation(job_id: i64) -> JobRecommendation {
        JobRecommendation {
            job_id,
            match_score: 80.0,
            match_analysis: "close fit".to_string(),
            advantages: vec![],
            challenges: vec![],
            suggestions: vec![],
            job_details: None,
        }
    }

    #[test]
    fn criteria_require_both_fields() {
        assert!(check_criteria(&criteria("Backend Engineer", "Beijing")).is_ok());
        assert!(check_criteria(&criteria("", "Beijing")).is_err());
        assert!(check_criteria(&criteria("Backend Engineer", "")).is_err());
        assert!(check_criteria(&criteria("   ", "Beijing")).is_err());
    }

    #[test]
    fn ok_response_loads_recommendations() {
        let response = MatchJobsResponse {
            status: "ok".to_string(),
            recommendations: vec![recommendation(7)],
            message: None,
        };
        match phase_for_response(response) {
            MatchPhase::Loaded(items) => assert_eq!(items[0].job_id, 7),
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn empty_ok_response_is_loaded_not_failed() {
        let response = MatchJobsResponse {
            status: "ok".to_string(),
            recommendations: vec![],
            message: Some("No matching jobs found".to_string()),
        };
        assert_eq!(phase_for_response(response), MatchPhase::Loaded(vec![]));
    }

    #[test]
    fn error_status_fails_with_service_message() {
        let response = MatchJobsResponse {
            status: "error".to_string(),
            recommendations: vec![recommendation(7)],
            message: Some("Please upload your resume first".to_string()),
        };
        assert_eq!(
            phase_for_response(response),
            MatchPhase::Failed("Please upload your resume first".to_string())
        );
    }

    #[test]
    fn error_status_without_message_uses_fallback() {
        let response = MatchJobsResponse {
            status: "error".to_string(),
            recommendations: vec![],
            message: None,
        };
        assert_eq!(
            phase_for_response(response),
            MatchPhase::Failed("Matching failed.".to_string())
        );
    }

    #[test]
    fn lone_response_applies() {
        let mut sequencer = ResponseSequencer::new();
        let seq = sequencer.begin();
        assert!(sequencer.try_apply(seq));
    }

    #[test]
    fn response_applies_at_most_once() {
        let mut sequencer = ResponseSequencer::new();
        let seq = sequencer.begin();
        assert!(sequencer.try_apply(seq));
        assert!(!sequencer.try_apply(seq));
    }

    #[test]
    fn newest_response_wins_when_it_arrives_first() {
        let mut sequencer = ResponseSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(sequencer.try_apply(second));
        assert!(!sequencer.try_apply(first));
    }

    #[test]
    fn superseded_response_is_discarded_even_before_newest_arrives() {
        let mut sequencer = ResponseSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(!sequencer.try_apply(first));
        assert!(sequencer.try_apply(second));
    }
}
