use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{DirectoryError, LoadError};
use crate::job::{seed_jobs, Job};

/// Immutable, ordered collection of jobs.
///
/// There are no mutating methods: once built, the directory can be shared
/// behind an `Arc` by any number of readers.
#[derive(Debug, Clone, Default)]
pub struct JobDirectory {
    jobs: Vec<Job>,
}

impl JobDirectory {
    /// Build a directory, validating that ids are positive and unique and
    /// that every title is non-empty
    pub fn new(jobs: Vec<Job>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if job.id == 0 {
                return Err(LoadError::InvalidId);
            }
            if job.title.trim().is_empty() {
                return Err(LoadError::EmptyTitle(job.id));
            }
            if !seen.insert(job.id) {
                return Err(LoadError::DuplicateId(job.id));
            }
        }

        Ok(Self { jobs })
    }

    /// Directory holding the built-in seed jobs
    pub fn seeded() -> Self {
        Self { jobs: seed_jobs() }
    }

    /// Parse a JSON array of job objects
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let jobs: Vec<Job> = serde_json::from_str(json)?;
        Self::new(jobs)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// List jobs in definition order.
    ///
    /// A missing or empty `search` returns everything; otherwise only jobs
    /// whose title contains `search`, ignoring case.
    pub fn list(&self, search: Option<&str>) -> Vec<&Job> {
        match search.filter(|s| !s.is_empty()) {
            Some(search) => {
                let needle = search.to_lowercase();
                self.jobs
                    .iter()
                    .filter(|job| job.title_contains(&needle))
                    .collect()
            }
            None => self.jobs.iter().collect(),
        }
    }

    pub fn get(&self, id: u64) -> Result<&Job, DirectoryError> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }
}
