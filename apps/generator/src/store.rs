#![allow(dead_code)]

//! JSON persistence for the three generated artifact collections.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::rfp::Rfp;

pub const PROFILES_FILE: &str = "profiles.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const RFPS_FILE: &str = "rfps.json";

/// Writes a collection as pretty-printed JSON (2-space indent, UTF-8),
/// creating the directory if needed. Returns the path written.
pub fn save_json<T: Serialize>(
    items: &[T],
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), items)?;
    info!("saved {} records to {}", items.len(), path.display());
    Ok(path)
}

fn load_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, AppError> {
    let path = dir.join(file_name);
    let file = match File::open(&path) {
        Ok(f) => f,
        // No file yet is a valid starting state for append runs.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn load_profiles(dir: &Path) -> Result<Vec<Profile>, AppError> {
    load_json(dir, PROFILES_FILE)
}

pub fn load_projects(dir: &Path) -> Result<Vec<Project>, AppError> {
    load_json(dir, PROJECTS_FILE)
}

pub fn load_rfps(dir: &Path) -> Result<Vec<Rfp>, AppError> {
    load_json(dir, RFPS_FILE)
}
