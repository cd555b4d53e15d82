//! In-memory, read-only directory of job postings.
//!
//! The directory is built once at startup (from the built-in seed set or a
//! JSON file) and never mutated afterwards, so it can be shared between
//! request handlers without any locking.

mod directory;
mod error;
mod job;

pub use directory::JobDirectory;
pub use error::{DirectoryError, LoadError};
pub use job::{seed_jobs, Job};
