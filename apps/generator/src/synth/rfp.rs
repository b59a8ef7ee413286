//! RFP synthesizer — proposal requests with per-skill headcount quotas.

use chrono::{Duration, Utc};
use fake::faker::address::en::CityName;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::profile::Proficiency;
use crate::models::rfp::{Rfp, RfpRequirement};

/// Cap on the quota any skill other than the last may receive, to spread
/// headcount across skills.
const MAX_PER_SKILL: u8 = 3;

pub struct RfpSynthesizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> RfpSynthesizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        RfpSynthesizer { catalog }
    }

    pub fn generate<R: Rng>(&self, count: u32, rng: &mut R) -> Result<Vec<Rfp>, AppError> {
        if count == 0 {
            return Err(AppError::InvalidArgument(
                "number of RFPs must be positive".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        let mut rfps = Vec::with_capacity(count as usize);

        for i in 0..count {
            let start_date = today + Duration::days(rng.gen_range(30..=180));
            let duration_months = rng.gen_range(6..=24u8);
            let deadline = start_date + Duration::days(i64::from(duration_months) * 30);
            let team_size = rng.gen_range(3..=12u8);

            // Sampled skill count never exceeds the team size, so the quota
            // split precondition always holds for generated RFPs.
            let num_skills = rng
                .gen_range(3..=6usize)
                .min(team_size as usize)
                .min(self.catalog.rfp_skills.len());
            let skills: Vec<&str> = self
                .catalog
                .rfp_skills
                .choose_multiple(rng, num_skills)
                .copied()
                .collect();
            let counts = split_team_quota(team_size, skills.len(), rng)?;

            let requirements = skills
                .iter()
                .zip(counts)
                .map(|(skill_name, required_count)| RfpRequirement {
                    skill_name: skill_name.to_string(),
                    min_proficiency: Proficiency::Advanced,
                    preferred_proficiency: Proficiency::Expert,
                    is_mandatory: true,
                    required_count,
                    preferred_certifications: Vec::new(),
                })
                .collect();

            rfps.push(Rfp {
                id: format!("RFP-{:03}", i + 1),
                title: self.catalog.rfp_types.choose(rng).unwrap().to_string(),
                client: self.catalog.rfp_clients.choose(rng).unwrap().to_string(),
                description: format!(
                    "Strategic initiative for {}.",
                    self.catalog.rfp_types.choose(rng).unwrap()
                ),
                project_type: "Software Development".to_string(),
                duration_months,
                team_size,
                budget_range: self.catalog.budget_ranges.choose(rng).unwrap().to_string(),
                start_date,
                deadline,
                requirements,
                location: CityName().fake_with_rng(rng),
                remote_allowed: true,
            });
        }

        Ok(rfps)
    }
}

/// Greedy left-to-right split of `team_size` slots across `num_skills`
/// skills: every skill except the last gets a random count that still leaves
/// at least one slot for each remaining skill; the last absorbs the rest.
/// Guarantees every count ≥ 1 and an exact total, which is why
/// `team_size ≥ num_skills` is a hard precondition.
pub(crate) fn split_team_quota<R: Rng>(
    team_size: u8,
    num_skills: usize,
    rng: &mut R,
) -> Result<Vec<u8>, AppError> {
    if num_skills == 0 {
        return Err(AppError::InvalidArgument(
            "quota split needs at least one skill".to_string(),
        ));
    }
    if usize::from(team_size) < num_skills {
        return Err(AppError::InvalidArgument(format!(
            "team size {team_size} cannot cover {num_skills} skills with one slot each"
        )));
    }

    let mut counts = Vec::with_capacity(num_skills);
    let mut slots_left = team_size;

    for idx in 0..num_skills {
        let count = if idx == num_skills - 1 {
            slots_left.max(1)
        } else {
            let remaining_after = (num_skills - idx - 1) as u8;
            let max_alloc = (slots_left - remaining_after).min(MAX_PER_SKILL);
            rng.gen_range(1..=max_alloc)
        };
        slots_left -= count;
        counts.push(count);
    }

    Ok(counts)
}
