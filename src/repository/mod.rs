//! Persistence gateway for the portfolio entities.
//!
//! Handlers and services only see [`PortfolioRepository`]; the MongoDB
//! implementation lives in [`mongo`].

use std::{future::Future, time::Duration};

use async_trait::async_trait;

use crate::error::RepoError;
use crate::models::{ContactMessage, Experience, NewExperience, NewTechnology, Technology};

pub mod mongo;
mod repo_types;

pub use mongo::MongoRepository;

/// Upper bound for a single store call.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Insert a technology and return its assigned identifier.
    async fn create_technology(&self, tech: &NewTechnology) -> Result<String, RepoError>;
    async fn list_technologies(&self) -> Result<Vec<Technology>, RepoError>;
    /// Overwrite the mutable fields of the technology with `id`.
    async fn update_technology(&self, id: &str, tech: &NewTechnology) -> Result<(), RepoError>;
    async fn delete_technology(&self, id: &str) -> Result<(), RepoError>;

    async fn create_experience(&self, exp: &NewExperience) -> Result<String, RepoError>;
    async fn list_experiences(&self) -> Result<Vec<Experience>, RepoError>;
    /// Overwrite the mutable fields of the experience, projects included.
    async fn update_experience(&self, id: &str, exp: &NewExperience) -> Result<(), RepoError>;
    async fn delete_experience(&self, id: &str) -> Result<(), RepoError>;

    async fn save_contact_message(&self, msg: &ContactMessage) -> Result<String, RepoError>;
}

/// Run `fut` with a hard deadline, mapping expiry to [`RepoError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, RepoError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => Err(RepoError::Timeout(limit)),
    }
}
