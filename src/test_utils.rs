//! In-memory gateway and router helpers for tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::error::RepoError;
use crate::models::{ContactMessage, Experience, NewExperience, NewTechnology, Technology};
use crate::repository::PortfolioRepository;
use crate::state::AppState;

pub const TEST_API_KEY: &str = "test-admin-key";

#[derive(Default)]
pub struct InMemoryRepository {
    technologies: RwLock<Vec<Technology>>,
    experiences: RwLock<Vec<Experience>>,
    messages: RwLock<Vec<ContactMessage>>,
    failing: bool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.failing {
            return Err(RepoError::Database("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryRepository {
    async fn create_technology(&self, tech: &NewTechnology) -> Result<String, RepoError> {
        self.check()?;
        let id = ObjectId::new().to_hex();
        self.technologies.write().unwrap().push(Technology {
            id: id.clone(),
            name: tech.name.clone(),
            level: tech.level.clone(),
            icon: tech.icon.clone(),
        });
        Ok(id)
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>, RepoError> {
        self.check()?;
        Ok(self.technologies.read().unwrap().clone())
    }

    async fn update_technology(&self, id: &str, tech: &NewTechnology) -> Result<(), RepoError> {
        self.check()?;
        ObjectId::parse_str(id)?;
        let mut all = self.technologies.write().unwrap();
        let found = all
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepoError::NotFound("technology"))?;
        found.name = tech.name.clone();
        found.level = tech.level.clone();
        found.icon = tech.icon.clone();
        Ok(())
    }

    async fn delete_technology(&self, id: &str) -> Result<(), RepoError> {
        self.check()?;
        ObjectId::parse_str(id)?;
        let mut all = self.technologies.write().unwrap();
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Err(RepoError::NotFound("technology"));
        }
        Ok(())
    }

    async fn create_experience(&self, exp: &NewExperience) -> Result<String, RepoError> {
        self.check()?;
        let id = ObjectId::new().to_hex();
        self.experiences.write().unwrap().push(Experience {
            id: id.clone(),
            company: exp.company.clone(),
            role: exp.role.clone(),
            period: exp.period.clone(),
            description: exp.description.clone(),
            projects: exp.projects.clone(),
        });
        Ok(id)
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, RepoError> {
        self.check()?;
        Ok(self.experiences.read().unwrap().clone())
    }

    async fn update_experience(&self, id: &str, exp: &NewExperience) -> Result<(), RepoError> {
        self.check()?;
        ObjectId::parse_str(id)?;
        let mut all = self.experiences.write().unwrap();
        let found = all
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepoError::NotFound("experience"))?;
        found.company = exp.company.clone();
        found.role = exp.role.clone();
        found.period = exp.period.clone();
        found.description = exp.description.clone();
        found.projects = exp.projects.clone();
        Ok(())
    }

    async fn delete_experience(&self, id: &str) -> Result<(), RepoError> {
        self.check()?;
        ObjectId::parse_str(id)?;
        let mut all = self.experiences.write().unwrap();
        let before = all.len();
        all.retain(|e| e.id != id);
        if all.len() == before {
            return Err(RepoError::NotFound("experience"));
        }
        Ok(())
    }

    async fn save_contact_message(&self, msg: &ContactMessage) -> Result<String, RepoError> {
        self.check()?;
        self.messages.write().unwrap().push(msg.clone());
        Ok(ObjectId::new().to_hex())
    }
}

pub fn test_config(api_key: Option<&str>) -> AppConfig {
    AppConfig {
        mongo_uri: "mongodb://localhost:27017".into(),
        db_name: "portfolio_test".into(),
        host: "127.0.0.1".into(),
        port: 8080,
        api_key: api_key.map(str::to_string),
    }
}

pub fn test_state(api_key: Option<&str>, repo: Arc<InMemoryRepository>) -> AppState {
    AppState::from_parts(
        Arc::new(test_config(api_key)),
        repo as Arc<dyn PortfolioRepository>,
    )
}

/// Router over a fresh in-memory store with [`TEST_API_KEY`] configured.
pub fn test_app() -> (Router, Arc<InMemoryRepository>) {
    let repo = Arc::new(InMemoryRepository::new());
    let app = crate::app::build_app(test_state(Some(TEST_API_KEY), repo.clone()));
    (app, repo)
}

pub fn json_request(method: &str, uri: &str, api_key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("X-API-KEY", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-KEY", key);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send one request and return the status with the body parsed as JSON
/// (`Null` for an empty body).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
