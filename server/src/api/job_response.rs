use directory::Job;
use serde::Serialize;
use utoipa::ToSchema;

/// Job posting as exposed over HTTP
#[derive(Serialize, ToSchema, Debug)]
#[schema(example = json!({
    "id": 2,
    "title": "Software Developer",
    "description": "Develop and maintain web applications."
}))]
pub struct JobResponse {
    /// Unique job identifier
    pub id: u64,
    /// Job title
    pub title: String,
    /// Free-form description
    pub description: String,
}

impl From<&Job> for JobResponse {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            description: job.description.clone(),
        }
    }
}
