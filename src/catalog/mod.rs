//! Loading candidate and listing snapshots from files.
//!
//! A catalog is a JSON document `{ "candidates": [...], "listings": [...] }`.
//! A roster is a CSV export of candidates with the headers
//! `id,name,skills,course,year,university,gpa,location,subjects,portfolio`.

mod normalizer;
mod parser;

use crate::matching::domain::{Candidate, Listing};
use crate::matching::repository::InMemoryProfiles;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read profile data: {}", err),
            CatalogError::Json(err) => write!(f, "invalid catalog JSON: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Candidates and listings read from one or more sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

impl ProfileCatalog {
    /// Appends roster candidates; on id clashes the roster entry wins once loaded
    /// into a repository.
    pub fn merge_roster(&mut self, roster: Vec<Candidate>) {
        self.candidates.extend(roster);
    }

    pub fn into_repository(self) -> InMemoryProfiles {
        InMemoryProfiles::new(self.candidates, self.listings)
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ProfileCatalog, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ProfileCatalog, CatalogError> {
        let catalog: ProfileCatalog = serde_json::from_reader(reader)?;
        info!(
            candidates = catalog.candidates.len(),
            listings = catalog.listings.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CatalogError> {
        let candidates = parser::parse_roster(reader)?;
        info!(candidates = candidates.len(), "roster imported");
        Ok(candidates)
    }
}
