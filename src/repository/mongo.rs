use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Bson},
    Client, Collection, Database,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{repo_types::*, with_timeout, PortfolioRepository};
use crate::error::RepoError;
use crate::models::{ContactMessage, Experience, NewExperience, NewTechnology, Technology};

const TECHNOLOGIES: &str = "technologies";
const EXPERIENCES: &str = "experiences";
const MESSAGES: &str = "messages";

/// Connect to the store and make sure it answers before serving traffic.
pub async fn connect(uri: &str) -> anyhow::Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("parse MongoDB connection string")?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("ping MongoDB")?;
    Ok(client)
}

#[derive(Clone)]
pub struct MongoRepository {
    db: Database,
    timeout: Duration,
}

impl MongoRepository {
    pub fn new(db: Database, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn technologies(&self) -> Collection<TechnologyDoc> {
        self.db.collection(TECHNOLOGIES)
    }

    fn experiences(&self) -> Collection<ExperienceDoc> {
        self.db.collection(EXPERIENCES)
    }

    fn messages(&self) -> Collection<MessageDoc> {
        self.db.collection(MESSAGES)
    }
}

fn inserted_id(id: Bson) -> String {
    match id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => id.to_string(),
    }
}

async fn find_all<T>(collection: Collection<T>) -> Result<Vec<T>, RepoError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let mut cursor = collection.find(doc! {}, None).await?;
    let mut out = Vec::new();
    while cursor.advance().await? {
        out.push(cursor.deserialize_current()?);
    }
    Ok(out)
}

async fn update_by_id<T>(
    collection: Collection<T>,
    entity: &'static str,
    id: &str,
    set: bson::Document,
) -> Result<(), RepoError>
where
    T: Send + Sync,
{
    let oid = ObjectId::parse_str(id)?;
    let res = collection
        .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
        .await?;
    if res.matched_count == 0 {
        return Err(RepoError::NotFound(entity));
    }
    Ok(())
}

async fn delete_by_id<T>(
    collection: Collection<T>,
    entity: &'static str,
    id: &str,
) -> Result<(), RepoError>
where
    T: Send + Sync,
{
    let oid = ObjectId::parse_str(id)?;
    let res = collection.delete_one(doc! { "_id": oid }, None).await?;
    if res.deleted_count == 0 {
        return Err(RepoError::NotFound(entity));
    }
    Ok(())
}

#[async_trait]
impl PortfolioRepository for MongoRepository {
    async fn create_technology(&self, tech: &NewTechnology) -> Result<String, RepoError> {
        with_timeout(self.timeout, async {
            let res = self
                .technologies()
                .insert_one(TechnologyDoc::from(tech), None)
                .await?;
            let id = inserted_id(res.inserted_id);
            debug!(%id, collection = TECHNOLOGIES, "inserted");
            Ok(id)
        })
        .await
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>, RepoError> {
        with_timeout(self.timeout, async {
            let docs = find_all(self.technologies()).await?;
            Ok(docs.into_iter().map(Technology::from).collect())
        })
        .await
    }

    async fn update_technology(&self, id: &str, tech: &NewTechnology) -> Result<(), RepoError> {
        let set = doc! {
            "name": tech.name.as_str(),
            "level": tech.level.as_str(),
            "icon": tech.icon.as_str(),
        };
        with_timeout(
            self.timeout,
            update_by_id(self.technologies(), "technology", id, set),
        )
        .await
    }

    async fn delete_technology(&self, id: &str) -> Result<(), RepoError> {
        with_timeout(
            self.timeout,
            delete_by_id(self.technologies(), "technology", id),
        )
        .await
    }

    async fn create_experience(&self, exp: &NewExperience) -> Result<String, RepoError> {
        with_timeout(self.timeout, async {
            let res = self
                .experiences()
                .insert_one(ExperienceDoc::from(exp), None)
                .await?;
            let id = inserted_id(res.inserted_id);
            debug!(%id, collection = EXPERIENCES, "inserted");
            Ok(id)
        })
        .await
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, RepoError> {
        with_timeout(self.timeout, async {
            let docs = find_all(self.experiences()).await?;
            Ok(docs.into_iter().map(Experience::from).collect())
        })
        .await
    }

    async fn update_experience(&self, id: &str, exp: &NewExperience) -> Result<(), RepoError> {
        let projects: Vec<ProjectDoc> = exp.projects.iter().map(ProjectDoc::from).collect();
        let projects = bson::to_bson(&projects)?;
        let set = doc! {
            "company": exp.company.as_str(),
            "role": exp.role.as_str(),
            "period": exp.period.as_str(),
            "description": exp.description.as_str(),
            "projects": projects,
        };
        with_timeout(
            self.timeout,
            update_by_id(self.experiences(), "experience", id, set),
        )
        .await
    }

    async fn delete_experience(&self, id: &str) -> Result<(), RepoError> {
        with_timeout(
            self.timeout,
            delete_by_id(self.experiences(), "experience", id),
        )
        .await
    }

    async fn save_contact_message(&self, msg: &ContactMessage) -> Result<String, RepoError> {
        with_timeout(self.timeout, async {
            let res = self
                .messages()
                .insert_one(MessageDoc::from(msg), None)
                .await?;
            let id = inserted_id(res.inserted_id);
            debug!(%id, collection = MESSAGES, "inserted");
            Ok(id)
        })
        .await
    }
}
