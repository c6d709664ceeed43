use std::sync::{Arc, Mutex};

use crate::models::feedback::{Feedback, Reactions};
use crate::storage::local_map::LocalMap;

const STORE_KEY: &str = "feedback";
const ID_BASE: i64 = 2000;

#[derive(Debug)]
struct StoreState {
    records: Vec<Feedback>,
    last_id: i64,
}

pub struct NewFeedback {
    pub candidate_id: i64,
    pub title: String,
    pub body: String,
    pub submitted_by: i64,
    pub submitted_at: String,
    pub reactions: Option<Reactions>,
}

/// Append-only evaluation log. Records never change after creation, the
/// view counter aside; there is no update or delete.
#[derive(Clone)]
pub struct FeedbackService {
    map: LocalMap,
    state: Arc<Mutex<StoreState>>,
}

impl FeedbackService {
    pub fn open(map: LocalMap) -> Self {
        let records: Vec<Feedback> = map.read(STORE_KEY, Vec::new());
        let last_id = records.iter().map(|f| f.id).max().unwrap_or(0).max(ID_BASE);
        Self {
            map,
            state: Arc::new(Mutex::new(StoreState { records, last_id })),
        }
    }

    pub fn list_by_candidate(&self, candidate_id: i64) -> Vec<Feedback> {
        let state = self.state.lock().expect("feedback store mutex poisoned");
        state
            .records
            .iter()
            .filter(|f| f.candidate_id == candidate_id)
            .cloned()
            .collect()
    }

    pub fn create(&self, new: NewFeedback) -> Feedback {
        let mut state = self.state.lock().expect("feedback store mutex poisoned");
        state.last_id += 1;
        let record = Feedback {
            id: state.last_id,
            candidate_id: new.candidate_id,
            title: new.title,
            body: new.body,
            reactions: new.reactions.unwrap_or_default(),
            views: 0,
            submitted_by: new.submitted_by,
            submitted_at: new.submitted_at,
        };
        state.records.insert(0, record.clone());
        self.map.write(STORE_KEY, &state.records);
        record
    }

    /// Bumps the view counter on every record owned by the candidate in one
    /// pass, then persists once.
    pub fn increment_views_for_candidate(&self, candidate_id: i64) {
        let mut state = self.state.lock().expect("feedback store mutex poisoned");
        for record in state
            .records
            .iter_mut()
            .filter(|f| f.candidate_id == candidate_id)
        {
            record.views += 1;
        }
        self.map.write(STORE_KEY, &state.records);
    }

    pub fn seed(&self, records: Vec<Feedback>) {
        let mut state = self.state.lock().expect("feedback store mutex poisoned");
        let highest = records.iter().map(|f| f.id).max().unwrap_or(0);
        state.last_id = state.last_id.max(highest);
        state.records = records;
        self.map.write(STORE_KEY, &state.records);
    }
}
