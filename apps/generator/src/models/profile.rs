#![allow(dead_code)]

//! Programmer profile entities — fixed-field structs, no dynamic lookups.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordinal skill-strength tier. The derived ordering is what eligibility
/// checks compare: `Beginner < Intermediate < Advanced < Expert`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// 1-based ordinal, matching the persisted convention.
    pub fn ordinal(self) -> u8 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }

    /// Threshold mapping from years of hands-on experience:
    /// `<2 → Beginner, <4 → Intermediate, <7 → Advanced, else → Expert`.
    pub fn from_years(years: u8) -> Self {
        match years {
            0..=1 => Proficiency::Beginner,
            2..=3 => Proficiency::Intermediate,
            4..=6 => Proficiency::Advanced,
            _ => Proficiency::Expert,
        }
    }

    /// One tier up, saturating at `Expert`. Used to derive the preferred
    /// proficiency of a requirement from its minimum.
    pub fn next(self) -> Self {
        match self {
            Proficiency::Beginner => Proficiency::Intermediate,
            Proficiency::Intermediate => Proficiency::Advanced,
            Proficiency::Advanced | Proficiency::Expert => Proficiency::Expert,
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// One technology on a profile. `years_experience` never exceeds the
/// profile's `total_years_experience`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub proficiency: Proficiency,
    pub years_experience: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub university_name: String,
    pub university_location: String,
    pub university_ranking: u32,
    pub degree: String,
    pub graduation_year: i32,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationAward {
    pub name: String,
    pub provider: String,
    pub date_earned: NaiveDate,
    pub expiry_date: NaiveDate,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
}

/// A synthesized programmer. Immutable once created — the assignment engine
/// never touches the profile itself, only an external ledger keyed by `id`.
/// Append-mode runs overwrite `id` before persisting to keep the sequence
/// continuous across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub total_years_experience: u8,
    pub hourly_rate: u32,
    pub currency: String,
    pub education: Education,
    pub soft_skills: Vec<SoftSkill>,
    pub languages: Vec<LanguageSkill>,
    pub skills: Vec<Skill>,
    /// Project names woven into CV prose; no cross-entity meaning.
    pub projects: Vec<String>,
    pub certifications: Vec<CertificationAward>,
}

impl Profile {
    /// First skill entry with the given name, if any.
    pub fn skill_named(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }
}
