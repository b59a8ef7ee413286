//! Profile synthesizer — programmer profiles from the catalogs plus
//! randomized attributes. Purely local: no LLM involvement here; prose
//! rendering consumes the finished profile downstream.

use chrono::{Datelike, Duration, Utc};
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::profile::{
    CertificationAward, Education, LanguageSkill, Proficiency, Profile, Skill, SoftSkill,
};

pub struct ProfileSynthesizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProfileSynthesizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        ProfileSynthesizer { catalog }
    }

    /// Generates `count` profiles with ids `1..=count`. Append-mode callers
    /// overwrite the ids afterwards to continue their own sequence.
    pub fn generate<R: Rng>(&self, count: u32, rng: &mut R) -> Result<Vec<Profile>, AppError> {
        if count == 0 {
            return Err(AppError::InvalidArgument(
                "number of profiles must be positive".to_string(),
            ));
        }

        let mut profiles = Vec::with_capacity(count as usize);
        for i in 0..count {
            let total_years_experience = rng.gen_range(2..=15u8);

            profiles.push(Profile {
                id: i + 1,
                name: Name().fake_with_rng(rng),
                email: SafeEmail().fake_with_rng(rng),
                phone: PhoneNumber().fake_with_rng(rng),
                location: CityName().fake_with_rng(rng),
                total_years_experience,
                hourly_rate: rng.gen_range(45..=160),
                currency: "USD".to_string(),
                education: self.education(total_years_experience, rng),
                soft_skills: self.soft_skills(rng),
                languages: self.languages(rng),
                skills: self.skills(total_years_experience, rng),
                projects: self.cv_projects(rng),
                certifications: self.certifications(rng),
            });
        }

        Ok(profiles)
    }

    /// Graduation year is pinned to experience so the timeline makes sense.
    fn education<R: Rng>(&self, total_years_experience: u8, rng: &mut R) -> Education {
        let university = self
            .catalog
            .universities
            .choose(rng)
            .expect("university directory is never empty");
        let current_year = Utc::now().year();
        let graduation_year =
            current_year - i32::from(total_years_experience) - rng.gen_range(0..=2);

        Education {
            university_name: university.name.to_string(),
            university_location: university.location.to_string(),
            university_ranking: university.ranking,
            degree: self.catalog.degrees.choose(rng).unwrap().to_string(),
            graduation_year,
            gpa: round2(rng.gen_range(3.2..=4.0)),
        }
    }

    fn soft_skills<R: Rng>(&self, rng: &mut R) -> Vec<SoftSkill> {
        let count = rng.gen_range(3..=5);
        self.catalog
            .soft_skills
            .choose_multiple(rng, count)
            .map(|name| SoftSkill {
                name: name.to_string(),
            })
            .collect()
    }

    /// English is always present; 0–2 other languages join it.
    fn languages<R: Rng>(&self, rng: &mut R) -> Vec<LanguageSkill> {
        let english = &self.catalog.languages[0];
        let mut languages = vec![LanguageSkill {
            name: english.name.to_string(),
            level: english.levels.choose(rng).unwrap().to_string(),
        }];

        let extra = rng.gen_range(0..=2);
        for pool in self.catalog.languages[1..].choose_multiple(rng, extra) {
            languages.push(LanguageSkill {
                name: pool.name.to_string(),
                level: pool.levels.choose(rng).unwrap().to_string(),
            });
        }
        languages
    }

    /// Per category: 70% chance of holding 1–3 of its skills. Years are drawn
    /// within the profile's total experience and map deterministically to a
    /// proficiency tier.
    fn skills<R: Rng>(&self, total_years_experience: u8, rng: &mut R) -> Vec<Skill> {
        let mut skills = Vec::new();
        for category in self.catalog.skill_taxonomy {
            if !rng.gen_bool(0.7) {
                continue;
            }
            let picks = rng.gen_range(1..=3usize).min(category.skills.len());
            for name in category.skills.choose_multiple(rng, picks) {
                let years_experience = rng.gen_range(1..=total_years_experience);
                skills.push(Skill {
                    name: name.to_string(),
                    category: category.name.to_string(),
                    proficiency: Proficiency::from_years(years_experience),
                    years_experience,
                });
            }
        }
        skills
    }

    fn cv_projects<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        let count = rng.gen_range(2..=5);
        self.catalog
            .cv_project_types
            .choose_multiple(rng, count)
            .map(|name| name.to_string())
            .collect()
    }

    fn certifications<R: Rng>(&self, rng: &mut R) -> Vec<CertificationAward> {
        let count = rng.gen_range(0..=3usize);
        if count == 0 {
            return Vec::new();
        }

        let today = Utc::now().date_naive();
        self.catalog
            .certifications
            .choose_multiple(rng, count)
            .map(|entry| {
                let date_earned = today - Duration::days(rng.gen_range(0..=365 * 3));
                CertificationAward {
                    name: entry.name.to_string(),
                    provider: entry.provider.to_string(),
                    date_earned,
                    expiry_date: date_earned + Duration::days(365 * 3),
                    score: rng.gen_range(700..=1000),
                }
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_zero_count_is_rejected() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            synth.generate(0, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generates_the_requested_number_with_sequential_ids() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(2);
        let profiles = synth.generate(12, &mut rng).unwrap();
        assert_eq!(profiles.len(), 12);
        for (i, profile) in profiles.iter().enumerate() {
            assert_eq!(profile.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_skill_years_never_exceed_total_experience() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(3);
        for profile in synth.generate(50, &mut rng).unwrap() {
            assert!((2..=15).contains(&profile.total_years_experience));
            for skill in &profile.skills {
                assert!(skill.years_experience >= 1);
                assert!(skill.years_experience <= profile.total_years_experience);
            }
        }
    }

    #[test]
    fn test_proficiency_always_matches_the_threshold_mapping() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(4);
        for profile in synth.generate(50, &mut rng).unwrap() {
            for skill in &profile.skills {
                assert_eq!(
                    skill.proficiency,
                    Proficiency::from_years(skill.years_experience),
                    "skill {} of profile {}",
                    skill.name,
                    profile.id
                );
            }
        }
    }

    #[test]
    fn test_skill_names_are_unique_within_a_profile() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(5);
        for profile in synth.generate(50, &mut rng).unwrap() {
            let mut seen = HashSet::new();
            for skill in &profile.skills {
                assert!(seen.insert(&skill.name), "duplicate skill {}", skill.name);
            }
        }
    }

    #[test]
    fn test_graduation_year_trails_experience_by_zero_to_two_years() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(6);
        let current_year = Utc::now().year();
        for profile in synth.generate(50, &mut rng).unwrap() {
            let base = current_year - i32::from(profile.total_years_experience);
            assert!(profile.education.graduation_year <= base);
            assert!(profile.education.graduation_year >= base - 2);
            assert!(profile.education.gpa >= 3.2 && profile.education.gpa <= 4.0);
        }
    }

    #[test]
    fn test_every_profile_speaks_english() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);
        for profile in synth.generate(30, &mut rng).unwrap() {
            assert!(profile.languages.iter().any(|l| l.name == "English"));
            assert!(profile.languages.len() <= 3);
            let soft = profile.soft_skills.len();
            assert!((3..=5).contains(&soft));
        }
    }

    #[test]
    fn test_certification_expiry_is_three_years_after_earning() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let mut rng = StdRng::seed_from_u64(8);
        for profile in synth.generate(50, &mut rng).unwrap() {
            assert!(profile.certifications.len() <= 3);
            for cert in &profile.certifications {
                assert_eq!(
                    cert.expiry_date - cert.date_earned,
                    Duration::days(365 * 3)
                );
                assert!((700..=1000).contains(&cert.score));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_identical_profiles() {
        let catalog = Catalog::builtin();
        let synth = ProfileSynthesizer::new(&catalog);
        let first = synth
            .generate(10, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = synth
            .generate(10, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }
}
