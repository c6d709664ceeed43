use crate::dto::candidate_dto::UpdateCandidateRequest;
use crate::dto::interview_dto::UpdateInterviewRequest;
use crate::models::candidate::CandidateStatus;
use crate::models::interview::Interview;
use crate::services::candidate_service::CandidateService;
use crate::services::interview_service::{InterviewList, InterviewService};

const DEFAULT_INTERVIEW_TITLE: &str = "Scheduled Interview";

/// Coordinates the interview collection with the candidate it belongs to:
/// listing bootstraps a default entry for freshly scheduled candidates, and
/// completion toggles feed back into the candidate's overall status.
#[derive(Clone)]
pub struct ScheduleService {
    candidates: CandidateService,
    interviews: InterviewService,
}

impl ScheduleService {
    pub fn new(candidates: CandidateService, interviews: InterviewService) -> Self {
        Self {
            candidates,
            interviews,
        }
    }

    /// Lists a candidate's interviews. A candidate that is still `scheduled`
    /// but has nothing on the books gets one default entry created before
    /// the first listing, so the schedule is never empty for them.
    pub fn list_for_candidate(&self, candidate_id: i64) -> InterviewList {
        let listing = self.interviews.list_by_candidate(candidate_id);
        if listing.total > 0 {
            return listing;
        }
        let scheduled = self
            .candidates
            .get(candidate_id)
            .map(|c| c.status == CandidateStatus::Scheduled)
            .unwrap_or(false);
        if !scheduled {
            return listing;
        }
        self.interviews
            .create(candidate_id, DEFAULT_INTERVIEW_TITLE.to_string(), false);
        self.interviews.list_by_candidate(candidate_id)
    }

    /// Applies a partial interview update; when the completion flag was part
    /// of the patch, re-derives the candidate's status afterwards. A failed
    /// update (owner mismatch or unknown id) reconciles nothing.
    pub fn update_interview(
        &self,
        candidate_id: i64,
        interview_id: i64,
        patch: UpdateInterviewRequest,
    ) -> Option<Interview> {
        let toggled = patch.completed.is_some();
        let updated = self.interviews.update(candidate_id, interview_id, patch)?;
        if toggled {
            self.reconcile_status(candidate_id);
        }
        Some(updated)
    }

    /// All interviews done -> `completed`. Some but not all -> back to
    /// `scheduled` (no partial state exists). None done -> leave whatever is
    /// set, including `cancelled`. The candidate is only written when the
    /// derived status actually differs.
    fn reconcile_status(&self, candidate_id: i64) {
        let Some(candidate) = self.candidates.get(candidate_id) else {
            return;
        };
        let listing = self.interviews.list_by_candidate(candidate_id);
        if listing.items.is_empty() {
            return;
        }
        let done = listing.items.iter().filter(|i| i.completed).count();
        let next = if done == listing.items.len() {
            CandidateStatus::Completed
        } else if done > 0 {
            CandidateStatus::Scheduled
        } else {
            return;
        };
        if next != candidate.status {
            tracing::debug!(candidate_id, status = next.as_str(), "candidate status re-derived");
            self.candidates.update(
                candidate_id,
                UpdateCandidateRequest {
                    status: Some(next),
                    ..Default::default()
                },
            );
        }
    }
}
