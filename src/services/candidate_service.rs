use std::sync::{Arc, Mutex};

use crate::dto::candidate_dto::{CreateCandidateRequest, UpdateCandidateRequest};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::storage::local_map::LocalMap;

const STORE_KEY: &str = "candidates";
// Assigned ids start above the seed range so hand-created records never
// collide with directory profiles.
const ID_BASE: i64 = 1000;

#[derive(Debug)]
struct StoreState {
    records: Vec<Candidate>,
    last_id: i64,
}

/// Candidate collection, newest first, hydrated from the local map at open
/// and re-persisted after every mutation.
#[derive(Clone)]
pub struct CandidateService {
    map: LocalMap,
    state: Arc<Mutex<StoreState>>,
}

impl CandidateService {
    pub fn open(map: LocalMap) -> Self {
        let records: Vec<Candidate> = map.read(STORE_KEY, Vec::new());
        let last_id = records.iter().map(|c| c.id).max().unwrap_or(0).max(ID_BASE);
        Self {
            map,
            state: Arc::new(Mutex::new(StoreState { records, last_id })),
        }
    }

    pub fn list(&self) -> Vec<Candidate> {
        let state = self.state.lock().expect("candidate store mutex poisoned");
        state.records.clone()
    }

    pub fn get(&self, id: i64) -> Option<Candidate> {
        let state = self.state.lock().expect("candidate store mutex poisoned");
        state.records.iter().find(|c| c.id == id).cloned()
    }

    pub fn create(&self, payload: CreateCandidateRequest) -> Candidate {
        let mut state = self.state.lock().expect("candidate store mutex poisoned");
        state.last_id += 1;
        let record = Candidate {
            id: state.last_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            company: payload.company,
            image: payload.image,
            status: payload.status.unwrap_or(CandidateStatus::Scheduled),
        };
        state.records.insert(0, record.clone());
        self.map.write(STORE_KEY, &state.records);
        record
    }

    pub fn update(&self, id: i64, patch: UpdateCandidateRequest) -> Option<Candidate> {
        let mut state = self.state.lock().expect("candidate store mutex poisoned");
        let record = state.records.iter_mut().find(|c| c.id == id)?;
        if let Some(first_name) = patch.first_name {
            record.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            record.last_name = last_name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(phone) = patch.phone {
            record.phone = phone;
        }
        if let Some(company) = patch.company {
            record.company = company;
        }
        if let Some(image) = patch.image {
            record.image = image;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        let updated = record.clone();
        self.map.write(STORE_KEY, &state.records);
        Some(updated)
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut state = self.state.lock().expect("candidate store mutex poisoned");
        let before = state.records.len();
        state.records.retain(|c| c.id != id);
        let removed = state.records.len() < before;
        self.map.write(STORE_KEY, &state.records);
        removed
    }

    /// Bulk-replaces the collection and bumps the id counter past the
    /// highest seeded id.
    pub fn seed(&self, records: Vec<Candidate>) {
        let mut state = self.state.lock().expect("candidate store mutex poisoned");
        let highest = records.iter().map(|c| c.id).max().unwrap_or(0);
        state.last_id = state.last_id.max(highest);
        state.records = records;
        self.map.write(STORE_KEY, &state.records);
    }
}
