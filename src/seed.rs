use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::models::NewQuestion;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedCategory {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

impl SeedData {
    pub fn merge(&mut self, other: SeedData) {
        for category in other.categories {
            if !self.categories.iter().any(|c| c.id == category.id) {
                self.categories.push(category);
            }
        }
        self.questions.extend(other.questions);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads every `*.json` file below `dir` in path order. A missing directory yields no data.
pub fn load_seed_dir(dir: impl AsRef<Path>) -> Result<SeedData, SeedError> {
    let dir = dir.as_ref();
    log::info!("Loading seed data from {:?}", dir);

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "json"))
        .collect();
    paths.sort();

    let mut seed = SeedData::default();
    for path in paths {
        log::info!("Loading file: {:?}", path);
        let content = std::fs::read_to_string(&path).map_err(|source| SeedError::Read {
            path: path.clone(),
            source,
        })?;
        let data: SeedData =
            serde_json::from_str(&content).map_err(|source| SeedError::Parse { path, source })?;
        seed.merge(data);
    }

    log::info!(
        "Loaded {} categories and {} questions",
        seed.categories.len(),
        seed.questions.len()
    );
    Ok(seed)
}
