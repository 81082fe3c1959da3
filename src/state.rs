use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::contact::services::ContactService;
use crate::repository::{mongo, MongoRepository, PortfolioRepository, OPERATION_TIMEOUT};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn PortfolioRepository>,
    pub contact: Arc<ContactService>,
}

impl AppState {
    /// Connect to the store once and build the handler graph on top of it.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let client = mongo::connect(&config.mongo_uri)
            .await
            .context("connect to MongoDB")?;
        tracing::info!(db = %config.db_name, "connected to MongoDB");

        let repo = Arc::new(MongoRepository::new(
            client.database(&config.db_name),
            OPERATION_TIMEOUT,
        )) as Arc<dyn PortfolioRepository>;

        Ok(Self::from_parts(Arc::new(config), repo))
    }

    pub fn from_parts(config: Arc<AppConfig>, repo: Arc<dyn PortfolioRepository>) -> Self {
        let contact = Arc::new(ContactService::new(repo.clone()));
        Self {
            config,
            repo,
            contact,
        }
    }
}
