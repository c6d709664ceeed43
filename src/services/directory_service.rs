use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus, Company};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryCompany {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub image: Option<String>,
    pub company: Option<DirectoryCompany>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryPage {
    pub users: Vec<DirectoryProfile>,
    pub total: i64,
}

/// Read-only client for the demo user directory the candidate seed comes
/// from. Nothing is ever written back.
#[derive(Clone)]
pub struct DirectoryService {
    client: Client,
    base_url: String,
}

impl DirectoryService {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { client, base_url }
    }

    pub async fn fetch_profiles(&self, limit: u32, skip: u32) -> Result<Vec<DirectoryProfile>> {
        let url = format!("{}/users?limit={}&skip={}", self.base_url, limit, skip);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let page = response.json::<DirectoryPage>().await?;
        Ok(page.users)
    }
}

/// Directory profiles become freshly scheduled candidates, keeping their
/// directory ids so repeat seeds overwrite rather than duplicate.
pub fn profile_to_candidate(profile: DirectoryProfile) -> Candidate {
    let company = profile
        .company
        .map(|c| Company {
            department: c.department,
            name: c.name,
            title: c.title,
        })
        .unwrap_or(Company {
            department: String::new(),
            name: String::new(),
            title: String::new(),
        });
    Candidate {
        id: profile.id,
        first_name: profile.first_name,
        last_name: profile.last_name,
        email: profile.email,
        phone: profile.phone,
        company,
        image: profile
            .image
            .unwrap_or_else(|| "/placeholder.svg".to_string()),
        status: CandidateStatus::Scheduled,
    }
}
