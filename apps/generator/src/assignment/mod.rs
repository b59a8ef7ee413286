//! Assignment engine — matches programmers to projects under mandatory-skill
//! and availability constraints.
//!
//! Projects are processed in generation order. Every booking narrows the
//! availability of later projects through the ledger, so reordering the
//! batch changes the outcome; callers must keep the sequence in which the
//! projects were generated.

pub mod interval;
pub mod ledger;

use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::assignment::interval::DateSpan;
use crate::assignment::ledger::AssignmentLedger;
use crate::catalog::Catalog;
use crate::models::profile::Profile;
use crate::models::project::{
    Assignment, EndBound, Project, ProjectStatus, SkillRequirement,
};

/// Performance ratings and their selection weights, skewed toward success.
const RATING_WEIGHTS: &[(u8, u32)] = &[(3, 10), (4, 40), (5, 50)];

pub struct AssignmentEngine<'a> {
    catalog: &'a Catalog,
    assignment_probability: f64,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(catalog: &'a Catalog, assignment_probability: f64) -> Self {
        AssignmentEngine {
            catalog,
            assignment_probability,
        }
    }

    /// Staffs a batch of projects from a fixed profile pool, mutating each
    /// project's `assigned_programmers` in place. Returns the ledger built
    /// during the run; callers that only want the enriched projects can drop
    /// it. An empty eligible set yields zero assignments, never an error.
    pub fn assign<R: Rng>(
        &self,
        projects: &mut [Project],
        profiles: &[Profile],
        rng: &mut R,
    ) -> AssignmentLedger {
        let mut ledger = AssignmentLedger::new(profiles);

        for project in projects.iter_mut() {
            // Leave a fraction of projects unstaffed to simulate bench capacity.
            if rng.gen::<f64>() > self.assignment_probability {
                continue;
            }

            let mandatory: Vec<&SkillRequirement> = project.mandatory_requirements().collect();
            let span = DateSpan::new(project.start_date, project.end_date);

            let eligible: Vec<&Profile> = profiles
                .iter()
                .filter(|p| mandatory.iter().all(|req| meets_requirement(p, req)))
                .filter(|p| ledger.is_available(p.id, span))
                .collect();

            let count = (project.team_size as usize)
                .min(profiles.len())
                .min(eligible.len());
            let selected: Vec<&Profile> = eligible.choose_multiple(rng, count).copied().collect();

            debug!(
                project = %project.id,
                eligible = eligible.len(),
                selected = selected.len(),
                "staffing project"
            );

            for programmer in selected {
                let assignment = self.materialize(project, programmer, rng);
                project.assigned_programmers.push(assignment.clone());
                ledger.record(assignment);
            }
        }

        ledger
    }

    /// Builds one assignment record for a selected programmer.
    fn materialize<R: Rng>(
        &self,
        project: &Project,
        programmer: &Profile,
        rng: &mut R,
    ) -> Assignment {
        let assignment_end_date = match project.end_date {
            EndBound::Bounded(end) => EndBound::Bounded(end),
            // No project end date: estimate from the planned duration.
            EndBound::Unbounded => EndBound::Bounded(
                project.start_date
                    + Duration::days(i64::from(project.estimated_duration_months) * 30),
            ),
        };

        let role = *self
            .catalog
            .roles
            .choose(rng)
            .expect("role vocabulary is never empty");

        let allocation_percent = match project.status {
            ProjectStatus::Completed => 100,
            ProjectStatus::Active => *[50u8, 100].choose(rng).unwrap(),
        };

        let (performance_rating, _) = *RATING_WEIGHTS
            .choose_weighted(rng, |&(_, weight)| weight)
            .expect("rating weights are well-formed");

        let project_outcome = if performance_rating >= 4 {
            "Successfully delivered"
        } else {
            "Completed with challenges"
        };

        Assignment {
            programmer_name: programmer.name.clone(),
            programmer_id: programmer.id,
            assignment_start_date: project.start_date,
            assignment_end_date,
            role_in_project: role.to_string(),
            allocation_percent,
            performance_rating,
            project_outcome: project_outcome.to_string(),
        }
    }
}

/// Whether the programmer holds the required skill at or above the minimum
/// tier. Only the floor matters — preferred proficiency never gates.
fn meets_requirement(profile: &Profile, req: &SkillRequirement) -> bool {
    profile
        .skill_named(&req.skill_name)
        .is_some_and(|skill| skill.proficiency >= req.min_proficiency)
}
