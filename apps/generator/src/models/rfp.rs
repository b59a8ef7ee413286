#![allow(dead_code)]

//! Request-for-proposal entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::profile::Proficiency;

/// One skill quota on an RFP. `required_count` is at least 1, and the counts
/// across all requirements of one RFP sum exactly to its `team_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpRequirement {
    pub skill_name: String,
    pub min_proficiency: Proficiency,
    pub preferred_proficiency: Proficiency,
    pub is_mandatory: bool,
    pub required_count: u8,
    /// Reserved — always empty today.
    pub preferred_certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    pub id: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub project_type: String,
    pub duration_months: u8,
    pub team_size: u8,
    pub budget_range: String,
    pub start_date: NaiveDate,
    /// `start_date` plus the full duration at 30 days per month.
    pub deadline: NaiveDate,
    pub requirements: Vec<RfpRequirement>,
    pub location: String,
    pub remote_allowed: bool,
}

impl Rfp {
    /// Sum of all per-skill quotas; equals `team_size` for well-formed RFPs.
    pub fn total_required_count(&self) -> u32 {
        self.requirements
            .iter()
            .map(|r| u32::from(r.required_count))
            .sum()
    }
}
