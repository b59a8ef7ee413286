//! Project entities and the `EndBound` interval endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::profile::Proficiency;

/// Completion state of a project. No "planned" state is ever produced —
/// every project is either fully in the past or spans the present moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Active,
}

/// The end of a dated interval: a concrete calendar date, or open-ended.
/// Persisted as a nullable date; normalized to this sum type at the
/// ingestion boundary so overlap checks never see ad hoc nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<NaiveDate>", into = "Option<NaiveDate>")]
pub enum EndBound {
    Bounded(NaiveDate),
    Unbounded,
}

impl From<Option<NaiveDate>> for EndBound {
    fn from(value: Option<NaiveDate>) -> Self {
        match value {
            Some(date) => EndBound::Bounded(date),
            None => EndBound::Unbounded,
        }
    }
}

impl From<EndBound> for Option<NaiveDate> {
    fn from(value: EndBound) -> Self {
        match value {
            EndBound::Bounded(date) => Some(date),
            EndBound::Unbounded => None,
        }
    }
}

/// One skill requirement on a project.
/// `preferred_proficiency` is informational only — eligibility is gated on
/// `min_proficiency` alone, and only when `is_mandatory` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill_name: String,
    pub min_proficiency: Proficiency,
    pub preferred_proficiency: Proficiency,
    pub is_mandatory: bool,
}

/// A staffing record attached to a project and mirrored into the per-run
/// assignment ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub programmer_name: String,
    pub programmer_id: u32,
    pub assignment_start_date: NaiveDate,
    /// Unbounded only when the owning project has no end date.
    pub assignment_end_date: EndBound,
    pub role_in_project: String,
    pub allocation_percent: u8,
    pub performance_rating: u8,
    pub project_outcome: String,
}

/// A historical or active project. `assigned_programmers` stays empty until
/// the assignment engine enriches the project in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: EndBound,
    pub estimated_duration_months: u8,
    pub budget: u32,
    pub status: ProjectStatus,
    pub team_size: u8,
    pub requirements: Vec<SkillRequirement>,
    pub assigned_programmers: Vec<Assignment>,
}

impl Project {
    pub fn mandatory_requirements(&self) -> impl Iterator<Item = &SkillRequirement> {
        self.requirements.iter().filter(|r| r.is_mandatory)
    }
}
