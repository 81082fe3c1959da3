use std::sync::Arc;

use time::OffsetDateTime;
use tracing::debug;

use crate::error::RepoError;
use crate::models::{ContactMessage, ContactRequest};
use crate::repository::PortfolioRepository;

/// Stamps contact submissions with server time and stores them.
pub struct ContactService {
    repo: Arc<dyn PortfolioRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn PortfolioRepository>) -> Self {
        Self { repo }
    }

    /// Returns the identifier of the stored message.
    pub async fn process_contact_message(&self, req: ContactRequest) -> Result<String, RepoError> {
        let msg = ContactMessage {
            name: req.name,
            email: req.email.trim().to_string(),
            message: req.message,
            created_at: OffsetDateTime::now_utc(),
        };
        // TODO: notify the site owner by email once a mail provider is configured.
        let id = self.repo.save_contact_message(&msg).await?;
        debug!(%id, created_at = %msg.created_at, "contact message stored");
        Ok(id)
    }
}
