use serde::{Deserialize, Serialize};

/// A single job posting
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl Job {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// `needle` must already be lowercase
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// Jobs served when no jobs file is configured
pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job::new(
            1,
            "Administrative Assistant",
            "Responsible for managing office tasks and communications.",
        ),
        Job::new(
            2,
            "Software Developer",
            "Develop and maintain web applications.",
        ),
    ]
}
