//! Orchestration — drives the synthesizers, the assignment engine, the text
//! and document collaborators, and JSON persistence.
//!
//! Flow (full run): profiles → CV render+publish per profile → projects →
//! assignment → RFPs → RFP render+publish → persisted JSON.
//!
//! Failures from the collaborators are handled per item: the item is logged
//! and skipped after a longer pacing interval. Nothing here retries a failed
//! item, and nothing substitutes placeholder content.

use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::assignment::AssignmentEngine;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::rfp::Rfp;
use crate::publish::{sanitize_filename, DocumentPublisher};
use crate::render::TextRenderer;
use crate::store;
use crate::synth::profile::ProfileSynthesizer;
use crate::synth::project::ProjectSynthesizer;
use crate::synth::rfp::RfpSynthesizer;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub profiles: usize,
    pub projects: usize,
    pub rfps: usize,
    pub documents: usize,
}

pub struct Pipeline {
    config: Config,
    catalog: Catalog,
    renderer: Arc<dyn TextRenderer>,
    publisher: Arc<dyn DocumentPublisher>,
}

impl Pipeline {
    pub fn new(
        config: Config,
        catalog: Catalog,
        renderer: Arc<dyn TextRenderer>,
        publisher: Arc<dyn DocumentPublisher>,
    ) -> Self {
        Pipeline {
            config,
            catalog,
            renderer,
            publisher,
        }
    }

    /// Full generation: a fresh corpus of profiles, projects (with
    /// assignments) and RFPs, plus one document per profile and RFP.
    pub async fn generate_all<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        info!(
            "generating {} programmer profiles",
            self.config.num_programmers
        );
        let profiles =
            ProfileSynthesizer::new(&self.catalog).generate(self.config.num_programmers, rng)?;

        for (i, profile) in profiles.iter().enumerate() {
            info!(
                "generating CV {}/{}: {} (${}/hr)",
                i + 1,
                profiles.len(),
                profile.name,
                profile.hourly_rate
            );
            if self.publish_cv(profile).await.is_some() {
                summary.documents += 1;
            }
        }

        info!("generating {} projects", self.config.num_projects);
        let mut projects =
            ProjectSynthesizer::new(&self.catalog).generate(self.config.num_projects, &profiles, rng)?;
        AssignmentEngine::new(&self.catalog, self.config.assignment_probability)
            .assign(&mut projects, &profiles, rng);

        info!("generating {} RFPs", self.config.num_rfps);
        let rfps = RfpSynthesizer::new(&self.catalog).generate(self.config.num_rfps, rng)?;
        for (i, rfp) in rfps.iter().enumerate() {
            info!("generating RFP document {}/{}: {}", i + 1, rfps.len(), rfp.title);
            if self.publish_rfp_doc(rfp).await.is_some() {
                summary.documents += 1;
            }
        }

        store::save_json(&profiles, &self.config.programmers_dir, store::PROFILES_FILE)?;
        store::save_json(&projects, &self.config.projects_dir, store::PROJECTS_FILE)?;
        store::save_json(&rfps, &self.config.rfps_dir, store::RFPS_FILE)?;

        summary.profiles = profiles.len();
        summary.projects = projects.len();
        summary.rfps = rfps.len();
        info!(
            "generation complete: {} profiles, {} projects, {} RFPs, {} documents",
            summary.profiles, summary.projects, summary.rfps, summary.documents
        );
        Ok(summary)
    }

    /// Append mode: extends the persisted profile corpus without touching
    /// projects or RFPs. Ids continue from the last persisted profile, one
    /// profile is generated and published at a time, and the combined set is
    /// checkpointed every `checkpoint_every` successes. New programmers stay
    /// unassigned to prior projects — assignment runs start from an empty
    /// ledger and are never replayed here.
    pub async fn append_profiles<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<RunSummary, AppError> {
        let existing = store::load_profiles(&self.config.programmers_dir)?;
        let last_id = existing.last().map(|p| p.id).unwrap_or(0);
        if existing.is_empty() {
            warn!("no persisted profiles found, starting the id sequence from scratch");
        } else {
            info!(
                "found {} existing profiles, last id {}",
                existing.len(),
                last_id
            );
        }

        let synth = ProfileSynthesizer::new(&self.catalog);
        let mut appended: Vec<Profile> = Vec::new();
        let mut summary = RunSummary::default();

        for i in 0..self.config.num_programmers {
            let mut profile = synth.generate(1, rng)?.remove(0);
            profile.id = last_id + i + 1;

            info!(
                "[{}/{}] generating CV for {} (id {})",
                i + 1,
                self.config.num_programmers,
                profile.name,
                profile.id
            );

            if self.publish_cv(&profile).await.is_none() {
                continue;
            }
            summary.documents += 1;
            appended.push(profile);

            if self.config.checkpoint_every > 0 && (i + 1) % self.config.checkpoint_every == 0 {
                info!("checkpoint: persisting {} profiles", existing.len() + appended.len());
                self.save_combined(&existing, &appended)?;
            }
        }

        self.save_combined(&existing, &appended)?;
        summary.profiles = existing.len() + appended.len();
        info!(
            "append complete: {} new profiles, {} total",
            appended.len(),
            summary.profiles
        );
        Ok(summary)
    }

    /// Generates projects and RFPs for an already-persisted profile corpus.
    pub async fn generate_rest<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<RunSummary, AppError> {
        let profiles = store::load_profiles(&self.config.programmers_dir)?;
        if profiles.is_empty() {
            return Err(AppError::InvalidArgument(
                "no persisted profiles found — run a full generation first".to_string(),
            ));
        }
        info!("loaded {} profiles", profiles.len());

        let mut summary = RunSummary {
            profiles: profiles.len(),
            ..RunSummary::default()
        };

        info!("generating {} projects", self.config.num_projects);
        let mut projects = ProjectSynthesizer::new(&self.catalog).generate(
            self.config.num_projects,
            &profiles,
            rng,
        )?;
        AssignmentEngine::new(&self.catalog, self.config.assignment_probability)
            .assign(&mut projects, &profiles, rng);
        store::save_json(&projects, &self.config.projects_dir, store::PROJECTS_FILE)?;

        info!("generating {} RFPs", self.config.num_rfps);
        let rfps = RfpSynthesizer::new(&self.catalog).generate(self.config.num_rfps, rng)?;
        store::save_json(&rfps, &self.config.rfps_dir, store::RFPS_FILE)?;

        for (i, rfp) in rfps.iter().enumerate() {
            info!("generating RFP document {}/{}", i + 1, rfps.len());
            if self.publish_rfp_doc(rfp).await.is_some() {
                summary.documents += 1;
            }
        }

        summary.projects = projects.len();
        summary.rfps = rfps.len();
        Ok(summary)
    }

    /// Rebuilds the RFP documents offline from the persisted JSON, with no
    /// LLM involvement — used to refresh document templates in place. The
    /// persisted records themselves are left untouched.
    pub async fn republish_rfp_docs(&self) -> Result<RunSummary, AppError> {
        let rfps = store::load_rfps(&self.config.rfps_dir)?;
        if rfps.is_empty() {
            return Err(AppError::InvalidArgument(
                "no persisted RFPs found — run a full generation first".to_string(),
            ));
        }

        let mut summary = RunSummary {
            rfps: rfps.len(),
            ..RunSummary::default()
        };
        for rfp in &rfps {
            let filename = format!("rfp_{}_{}", rfp.id, sanitize_filename(&rfp.title));
            let markdown = crate::render::rfp_document_markdown(rfp);
            self.publisher
                .publish(&markdown, &filename, &self.config.rfps_dir)?;
            info!("republished document for {}", rfp.id);
            summary.documents += 1;
        }
        Ok(summary)
    }

    /// Renders and publishes one CV, pacing afterwards. Returns `None` on
    /// failure after logging and the longer error pause.
    async fn publish_cv(&self, profile: &Profile) -> Option<PathBuf> {
        let filename = format!("cv_{:03}_{}", profile.id, sanitize_filename(&profile.name));
        let rendered = self.renderer.render_cv(profile).await;
        self.render_one(rendered, &filename, &self.config.programmers_dir)
            .await
    }

    async fn publish_rfp_doc(&self, rfp: &Rfp) -> Option<PathBuf> {
        let filename = format!("rfp_{}_{}", rfp.id, sanitize_filename(&rfp.title));
        let rendered = self.renderer.render_rfp(rfp).await;
        self.render_one(rendered, &filename, &self.config.rfps_dir)
            .await
    }

    async fn render_one(
        &self,
        rendered: Result<String, AppError>,
        filename: &str,
        dir: &std::path::Path,
    ) -> Option<PathBuf> {
        let result = rendered.and_then(|markdown| self.publisher.publish(&markdown, filename, dir));
        match result {
            Ok(path) => {
                tokio::time::sleep(self.config.pacing).await;
                Some(path)
            }
            Err(e) => {
                warn!("skipping document {filename}: {e}");
                tokio::time::sleep(self.config.error_pacing).await;
                None
            }
        }
    }

    fn save_combined(&self, existing: &[Profile], appended: &[Profile]) -> Result<(), AppError> {
        let combined: Vec<&Profile> = existing.iter().chain(appended.iter()).collect();
        store::save_json(&combined, &self.config.programmers_dir, store::PROFILES_FILE)?;
        Ok(())
    }
}
