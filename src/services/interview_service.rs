use std::sync::{Arc, Mutex};

use crate::dto::interview_dto::UpdateInterviewRequest;
use crate::models::interview::Interview;
use crate::storage::local_map::LocalMap;

const STORE_KEY: &str = "interviews";
const ID_BASE: i64 = 3000;

#[derive(Debug)]
struct StoreState {
    records: Vec<Interview>,
    last_id: i64,
}

#[derive(Debug, Clone)]
pub struct InterviewList {
    pub items: Vec<Interview>,
    pub total: usize,
}

/// One global interview collection shared by all candidates, ids unique
/// across the whole of it.
#[derive(Clone)]
pub struct InterviewService {
    map: LocalMap,
    state: Arc<Mutex<StoreState>>,
}

impl InterviewService {
    pub fn open(map: LocalMap) -> Self {
        let records: Vec<Interview> = map.read(STORE_KEY, Vec::new());
        let last_id = records.iter().map(|i| i.id).max().unwrap_or(0).max(ID_BASE);
        Self {
            map,
            state: Arc::new(Mutex::new(StoreState { records, last_id })),
        }
    }

    pub fn list_by_candidate(&self, candidate_id: i64) -> InterviewList {
        let state = self.state.lock().expect("interview store mutex poisoned");
        let items: Vec<Interview> = state
            .records
            .iter()
            .filter(|i| i.candidate_id == candidate_id)
            .cloned()
            .collect();
        let total = items.len();
        InterviewList { items, total }
    }

    pub fn create(&self, candidate_id: i64, description: String, completed: bool) -> Interview {
        let mut state = self.state.lock().expect("interview store mutex poisoned");
        state.last_id += 1;
        let record = Interview {
            id: state.last_id,
            candidate_id,
            description,
            completed,
        };
        state.records.insert(0, record.clone());
        self.map.write(STORE_KEY, &state.records);
        record
    }

    /// Matches on interview id AND owner. An id hit under a different
    /// candidate reads as not-found rather than touching the other
    /// candidate's record.
    pub fn update(
        &self,
        candidate_id: i64,
        interview_id: i64,
        patch: UpdateInterviewRequest,
    ) -> Option<Interview> {
        let mut state = self.state.lock().expect("interview store mutex poisoned");
        let record = state
            .records
            .iter_mut()
            .find(|i| i.id == interview_id && i.candidate_id == candidate_id)?;
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(completed) = patch.completed {
            record.completed = completed;
        }
        let updated = record.clone();
        self.map.write(STORE_KEY, &state.records);
        Some(updated)
    }

    pub fn seed(&self, records: Vec<Interview>) {
        let mut state = self.state.lock().expect("interview store mutex poisoned");
        let highest = records.iter().map(|i| i.id).max().unwrap_or(0);
        state.last_id = state.last_id.max(highest);
        state.records = records;
        self.map.write(STORE_KEY, &state.records);
    }
}
