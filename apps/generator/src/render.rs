//! Text rendering — pluggable, trait-based renderer that turns structured
//! records into markdown prose.
//!
//! Default: `LlmTextRenderer` (Claude-backed). The trait seam exists so the
//! pipeline can run against a canned renderer in tests without network
//! access.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::{CV_SYSTEM, RFP_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::Profile;
use crate::models::rfp::Rfp;

/// Renders structured records to free-form markdown. Empty output is an
/// error — there is deliberately no placeholder fallback.
#[async_trait]
pub trait TextRenderer: Send + Sync {
    async fn render_cv(&self, profile: &Profile) -> Result<String, AppError>;
    async fn render_rfp(&self, rfp: &Rfp) -> Result<String, AppError>;
}

/// LLM-backed renderer used in production runs.
pub struct LlmTextRenderer {
    llm: LlmClient,
}

impl LlmTextRenderer {
    pub fn new(llm: LlmClient) -> Self {
        LlmTextRenderer { llm }
    }
}

#[async_trait]
impl TextRenderer for LlmTextRenderer {
    async fn render_cv(&self, profile: &Profile) -> Result<String, AppError> {
        self.llm
            .render(&cv_prompt(profile), CV_SYSTEM)
            .await
            .map_err(|e| match e {
                LlmError::EmptyContent => AppError::EmptyGeneration(format!(
                    "LLM returned empty content for {}",
                    profile.name
                )),
                other => AppError::Llm(format!("CV rendering failed for {}: {other}", profile.name)),
            })
    }

    async fn render_rfp(&self, rfp: &Rfp) -> Result<String, AppError> {
        self.llm
            .render(&rfp_prompt(rfp), RFP_SYSTEM)
            .await
            .map_err(|e| match e {
                LlmError::EmptyContent => AppError::EmptyGeneration(format!(
                    "LLM returned empty content for RFP {}",
                    rfp.id
                )),
                other => AppError::Llm(format!("RFP rendering failed for {}: {other}", rfp.id)),
            })
    }
}

/// Builds the CV prompt. Every structured fact the profile carries is spelled
/// out so the model has nothing to invent.
pub(crate) fn cv_prompt(profile: &Profile) -> String {
    let skills_text = profile
        .skills
        .iter()
        .map(|s| format!("{} ({}, {} yrs)", s.name, s.proficiency, s.years_experience))
        .collect::<Vec<_>>()
        .join(", ");

    let soft_text = profile
        .soft_skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let langs_text = profile
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.name, l.level))
        .collect::<Vec<_>>()
        .join(", ");

    let certs_text = profile
        .certifications
        .iter()
        .map(|c| format!("{} (Score: {}, Exp: {})", c.name, c.score, c.expiry_date))
        .collect::<Vec<_>>()
        .join(", ");

    let edu = &profile.education;
    let edu_text = format!(
        "{} at {} (Rank: #{}, GPA: {})",
        edu.degree, edu.university_name, edu.university_ranking, edu.gpa
    );

    format!(
        r#"Create a professional CV in markdown format for a programmer.

VITAL DATA TO INCLUDE (Do not hallucinate different values):
Name: {name}
Email: {email} | Phone: {phone}
Location: {location}
Hourly Rate: ${rate}/hr
Total Experience: {experience} years

EDUCATION:
{edu_text}

SKILLS:
{skills_text}

SOFT SKILLS:
{soft_text}

LANGUAGES:
{langs_text}

CERTIFICATIONS:
{certs_text}

PROJECT CONTEXT (Mention these names in Experience):
{projects}

Requirements:
1. Use proper markdown formatting.
2. **Explicitly mention** the Hourly Rate, University Ranking, GPA, and Exam Scores in the text.
3. In the Experience section, invent 2-3 detailed roles. For each role, mention the **Company Industry** (e.g. FinTech) and **Size** (Startup/Enterprise).
4. Use the specific years of experience provided for skills.
5. Create a Summary section highlighting total years and soft skills.

IMPORTANT: Return ONLY the CV content in markdown format.
"#,
        name = profile.name,
        email = profile.email,
        phone = profile.phone,
        location = profile.location,
        rate = profile.hourly_rate,
        experience = profile.total_years_experience,
        projects = profile.projects.join(", "),
    )
}

/// Builds the RFP prompt with the strict header contract.
pub(crate) fn rfp_prompt(rfp: &Rfp) -> String {
    let requirements_text = rfp
        .requirements
        .iter()
        .map(|req| {
            format!(
                "- {}: Required {} (Preferred: {}, Open Positions: {})",
                req.skill_name, req.min_proficiency, req.preferred_proficiency, req.required_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Create a professional RFP (Request for Proposal) document in markdown format.

CRITICAL INSTRUCTION: You MUST use EXACTLY the following headers in this order:
# Executive Summary
# Project Scope
# Technical Requirements
# Team Structure & Budget
# Timeline
# Submission Guidelines

DETAILS TO INCLUDE:
Project: {title}
Client: {client}
Budget: {budget}
Start Date: {start}
Deadline: {deadline}
Duration: {duration} months
Team Size: {team_size} specialists

Technical Requirements List:
{requirements_text}

Make it sound professional and business-oriented. Return ONLY the RFP content in markdown.
"#,
        title = rfp.title,
        client = rfp.client,
        budget = rfp.budget_range,
        start = rfp.start_date,
        deadline = rfp.deadline,
        duration = rfp.duration_months,
        team_size = rfp.team_size,
    )
}

/// Offline RFP document body built from the persisted record alone — used by
/// the republish workflow to refresh documents without any LLM call.
pub(crate) fn rfp_document_markdown(rfp: &Rfp) -> String {
    let requirement_rows = rfp
        .requirements
        .iter()
        .map(|req| {
            format!(
                "- **{}**: {} (Open Positions: {})",
                req.skill_name, req.min_proficiency, req.required_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let contact_domain = rfp.client.to_lowercase().replace(' ', "");

    format!(
        r#"# Request for Proposal: {title}

**Client:** {client}
**Budget:** {budget}
**Deadline:** {deadline}

## 1. Executive Summary
Strategic initiative for {project_type}.
We are looking to assemble a team of **{team_size} specialists**.

## 2. Technical Requirements & Capacity
The following skills and capacity are required for the successful delivery:

{requirement_rows}

## 3. Submission Guidelines
Proposals should be submitted by {start}.
Contact: rfp@{contact_domain}.com
"#,
        title = rfp.title,
        client = rfp.client,
        budget = rfp.budget_range,
        deadline = rfp.deadline,
        project_type = rfp.project_type,
        team_size = rfp.team_size,
        start = rfp.start_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::catalog::Catalog;
    use crate::synth::profile::ProfileSynthesizer;
    use crate::synth::rfp::RfpSynthesizer;

    #[test]
    fn test_cv_prompt_carries_every_vital_fact() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let profile = ProfileSynthesizer::new(&catalog)
            .generate(1, &mut rng)
            .unwrap()
            .remove(0);

        let prompt = cv_prompt(&profile);
        assert!(prompt.contains(&profile.name));
        assert!(prompt.contains(&profile.email));
        assert!(prompt.contains(&format!("${}/hr", profile.hourly_rate)));
        assert!(prompt.contains(&format!("{} years", profile.total_years_experience)));
        assert!(prompt.contains(&profile.education.university_name));
        for skill in &profile.skills {
            assert!(prompt.contains(&skill.name));
        }
    }

    #[test]
    fn test_rfp_prompt_pins_the_header_contract_and_quotas() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        let rfp = RfpSynthesizer::new(&catalog)
            .generate(1, &mut rng)
            .unwrap()
            .remove(0);

        let prompt = rfp_prompt(&rfp);
        for header in [
            "# Executive Summary",
            "# Project Scope",
            "# Technical Requirements",
            "# Team Structure & Budget",
            "# Timeline",
            "# Submission Guidelines",
        ] {
            assert!(prompt.contains(header), "missing header {header}");
        }
        for req in &rfp.requirements {
            assert!(prompt.contains(&req.skill_name));
            assert!(prompt.contains(&format!("Open Positions: {}", req.required_count)));
        }
    }

    #[test]
    fn test_offline_rfp_document_lists_every_quota() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(4);
        let rfp = RfpSynthesizer::new(&catalog)
            .generate(1, &mut rng)
            .unwrap()
            .remove(0);

        let document = rfp_document_markdown(&rfp);
        assert!(document.starts_with(&format!("# Request for Proposal: {}", rfp.title)));
        assert!(document.contains(&format!("**{} specialists**", rfp.team_size)));
        for req in &rfp.requirements {
            assert!(document.contains(&format!(
                "- **{}**: {} (Open Positions: {})",
                req.skill_name, req.min_proficiency, req.required_count
            )));
        }
        // Contact address derives from the client name.
        assert!(document.contains(&format!(
            "rfp@{}.com",
            rfp.client.to_lowercase().replace(' ', "")
        )));
    }

    #[test]
    fn test_rfp_prompt_formats_dates_as_iso() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let rfp = RfpSynthesizer::new(&catalog)
            .generate(1, &mut rng)
            .unwrap()
            .remove(0);

        let prompt = rfp_prompt(&rfp);
        let expected: NaiveDate = rfp.start_date;
        assert!(prompt.contains(&expected.to_string()));
    }
}
