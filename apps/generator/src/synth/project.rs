//! Project synthesizer — historical/active batches with skill requirements.
//!
//! Month arithmetic uses the fixed 1 month = 30 days convention shared by
//! the whole dataset.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::profile::{Proficiency, Profile};
use crate::models::project::{EndBound, Project, ProjectStatus, SkillRequirement};

/// Tiers a requirement minimum may be drawn from (never Expert).
const MIN_TIERS: &[Proficiency] = &[
    Proficiency::Beginner,
    Proficiency::Intermediate,
    Proficiency::Advanced,
];

pub struct ProjectSynthesizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProjectSynthesizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        ProjectSynthesizer { catalog }
    }

    /// Generates `count` projects: `floor(0.67·count)` completed ones first,
    /// the remainder active, ids numbered in generation order. Requirement
    /// skills come from the pool observed across `profiles`, or from the
    /// static fallback pool when no profiles are supplied.
    pub fn generate<R: Rng>(
        &self,
        count: u32,
        profiles: &[Profile],
        rng: &mut R,
    ) -> Result<Vec<Project>, AppError> {
        if count == 0 {
            return Err(AppError::InvalidArgument(
                "number of projects must be positive".to_string(),
            ));
        }

        let skill_pool = self.skill_pool(profiles);
        let today = Utc::now().date_naive();

        let num_historical = (f64::from(count) * 0.67) as u32;
        let num_active = count - num_historical;

        let mut projects = Vec::with_capacity(count as usize);
        for i in 0..num_historical {
            projects.push(self.create(ProjectStatus::Completed, i + 1, today, &skill_pool, rng));
        }
        for i in 0..num_active {
            projects.push(self.create(
                ProjectStatus::Active,
                num_historical + i + 1,
                today,
                &skill_pool,
                rng,
            ));
        }

        Ok(projects)
    }

    /// Distinct skill names seen across the profile pool, in stable order so
    /// seeded runs reproduce.
    fn skill_pool(&self, profiles: &[Profile]) -> Vec<String> {
        let observed: BTreeSet<&str> = profiles
            .iter()
            .flat_map(|p| p.skills.iter().map(|s| s.name.as_str()))
            .collect();

        if observed.is_empty() {
            self.catalog
                .fallback_skills
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            observed.into_iter().map(String::from).collect()
        }
    }

    fn create<R: Rng>(
        &self,
        status: ProjectStatus,
        index: u32,
        today: NaiveDate,
        skill_pool: &[String],
        rng: &mut R,
    ) -> Project {
        let project_type = *self.catalog.project_types.choose(rng).unwrap();
        let client = *self.catalog.clients.choose(rng).unwrap();
        let duration_months = rng.gen_range(3..=18u8);

        let (start_date, end_date) = match status {
            ProjectStatus::Completed => {
                // Anchor a random end point in the past, walk back the duration.
                let days_ago_ended = rng.gen_range(30..=700i64);
                let end = today - Duration::days(days_ago_ended);
                let start = end - Duration::days(i64::from(duration_months) * 30);
                (start, EndBound::Bounded(end))
            }
            ProjectStatus::Active => {
                // Some months already elapsed, so today falls strictly inside.
                let months_passed = if duration_months > 1 {
                    rng.gen_range(1..=duration_months - 1)
                } else {
                    0
                };
                let start = today - Duration::days(i64::from(months_passed) * 30);
                let end = start + Duration::days(i64::from(duration_months) * 30);
                (start, EndBound::Bounded(end))
            }
        };

        Project {
            id: format!("PRJ-{index:03}"),
            name: format!("{project_type} for {client}"),
            client: client.to_string(),
            description: format!(
                "Development of {} focusing on scalability.",
                project_type.to_lowercase()
            ),
            start_date,
            end_date,
            estimated_duration_months: duration_months,
            budget: rng.gen_range(50_000..=500_000),
            status,
            team_size: rng.gen_range(2..=8),
            requirements: self.requirements(skill_pool, rng),
            assigned_programmers: Vec::new(),
        }
    }

    fn requirements<R: Rng>(&self, skill_pool: &[String], rng: &mut R) -> Vec<SkillRequirement> {
        let num_reqs = rng.gen_range(3..=8usize).min(skill_pool.len());
        skill_pool
            .choose_multiple(rng, num_reqs)
            .map(|skill_name| {
                let min_proficiency = *MIN_TIERS.choose(rng).unwrap();
                SkillRequirement {
                    skill_name: skill_name.clone(),
                    min_proficiency,
                    preferred_proficiency: min_proficiency.next(),
                    is_mandatory: rng.gen_ratio(2, 3),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    use crate::synth::profile::ProfileSynthesizer;

    #[test]
    fn test_zero_count_is_rejected() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            synth.generate(0, &[], &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_three_projects_with_no_pool_split_two_historical_one_active() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(2);
        let projects = synth.generate(3, &[], &mut rng).unwrap();

        assert_eq!(projects.len(), 3);
        let completed = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();
        assert_eq!(completed, 2);

        // No profiles supplied: requirements draw from the static fallback pool.
        let fallback: HashSet<&str> = catalog.fallback_skills.iter().copied().collect();
        for project in &projects {
            for req in &project.requirements {
                assert!(fallback.contains(req.skill_name.as_str()));
            }
        }
    }

    #[test]
    fn test_historical_projects_come_first_with_sequential_ids() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(3);
        let projects = synth.generate(10, &[], &mut rng).unwrap();

        // floor(0.67 * 10) = 6 completed, then 4 active.
        for (i, project) in projects.iter().enumerate() {
            assert_eq!(project.id, format!("PRJ-{:03}", i + 1));
            let expected = if i < 6 {
                ProjectStatus::Completed
            } else {
                ProjectStatus::Active
            };
            assert_eq!(project.status, expected, "project {}", project.id);
        }
    }

    #[test]
    fn test_completed_projects_lie_fully_in_the_past() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(4);
        let today = Utc::now().date_naive();

        for project in synth.generate(60, &[], &mut rng).unwrap() {
            if project.status != ProjectStatus::Completed {
                continue;
            }
            let EndBound::Bounded(end) = project.end_date else {
                panic!("completed project without an end date");
            };
            assert!(end < today, "project {} ends in the future", project.id);
            assert!(project.start_date < end);
            assert_eq!(
                end - project.start_date,
                Duration::days(i64::from(project.estimated_duration_months) * 30)
            );
        }
    }

    #[test]
    fn test_active_projects_span_the_present_moment() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(5);
        let today = Utc::now().date_naive();

        for project in synth.generate(60, &[], &mut rng).unwrap() {
            if project.status != ProjectStatus::Active {
                continue;
            }
            let EndBound::Bounded(end) = project.end_date else {
                panic!("active project without an end date");
            };
            assert!(project.start_date < today, "project {}", project.id);
            assert!(today < end, "project {}", project.id);
        }
    }

    #[test]
    fn test_requirements_sample_the_observed_profile_skills() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(6);
        let profiles = ProfileSynthesizer::new(&catalog)
            .generate(10, &mut rng)
            .unwrap();
        let observed: HashSet<&str> = profiles
            .iter()
            .flat_map(|p| p.skills.iter().map(|s| s.name.as_str()))
            .collect();

        let synth = ProjectSynthesizer::new(&catalog);
        for project in synth.generate(30, &profiles, &mut rng).unwrap() {
            assert!(!project.requirements.is_empty());
            assert!(project.requirements.len() <= 8);
            for req in &project.requirements {
                assert!(
                    observed.contains(req.skill_name.as_str()),
                    "requirement {} not held by any profile",
                    req.skill_name
                );
            }
        }
    }

    #[test]
    fn test_preferred_proficiency_is_one_tier_above_the_minimum() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        for project in synth.generate(40, &[], &mut rng).unwrap() {
            for req in &project.requirements {
                assert!(req.min_proficiency <= Proficiency::Advanced);
                assert_eq!(req.preferred_proficiency, req.min_proficiency.next());
            }
        }
    }

    #[test]
    fn test_duration_budget_and_team_size_stay_in_range() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(8);

        for project in synth.generate(40, &[], &mut rng).unwrap() {
            assert!((3..=18).contains(&project.estimated_duration_months));
            assert!((50_000..=500_000).contains(&project.budget));
            assert!((2..=8).contains(&project.team_size));
            assert!(project.assigned_programmers.is_empty());
        }
    }

    #[test]
    fn test_same_seed_reproduces_identical_projects() {
        let catalog = Catalog::builtin();
        let synth = ProjectSynthesizer::new(&catalog);
        let first = synth
            .generate(15, &[], &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = synth
            .generate(15, &[], &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }
}
