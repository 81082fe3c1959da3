use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::models::{
    null_as_default, ContactMessage, Experience, NewExperience, NewTechnology, Project, Technology,
};

/// Technology document in the `technologies` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub icon: String,
}

impl From<&NewTechnology> for TechnologyDoc {
    fn from(t: &NewTechnology) -> Self {
        Self {
            id: None,
            name: t.name.clone(),
            level: t.level.clone(),
            icon: t.icon.clone(),
        }
    }
}

impl From<TechnologyDoc> for Technology {
    fn from(d: TechnologyDoc) -> Self {
        Self {
            id: d.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: d.name,
            level: d.level,
            icon: d.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDoc {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
}

impl From<&Project> for ProjectDoc {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            tech_stack: p.tech_stack.clone(),
        }
    }
}

impl From<ProjectDoc> for Project {
    fn from(p: ProjectDoc) -> Self {
        Self {
            name: p.name,
            description: p.description,
            tech_stack: p.tech_stack,
        }
    }
}

/// Experience document in the `experiences` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectDoc>,
}

impl From<&NewExperience> for ExperienceDoc {
    fn from(e: &NewExperience) -> Self {
        Self {
            id: None,
            company: e.company.clone(),
            role: e.role.clone(),
            period: e.period.clone(),
            description: e.description.clone(),
            projects: e.projects.iter().map(ProjectDoc::from).collect(),
        }
    }
}

impl From<ExperienceDoc> for Experience {
    fn from(d: ExperienceDoc) -> Self {
        Self {
            id: d.id.map(|id| id.to_hex()).unwrap_or_default(),
            company: d.company,
            role: d.role,
            period: d.period,
            description: d.description,
            projects: d.projects.into_iter().map(Project::from).collect(),
        }
    }
}

/// Contact message document in the `messages` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: bson::DateTime,
}

impl From<&ContactMessage> for MessageDoc {
    fn from(m: &ContactMessage) -> Self {
        let millis = (m.created_at.unix_timestamp_nanos() / 1_000_000) as i64;
        Self {
            id: None,
            name: m.name.clone(),
            email: m.email.clone(),
            message: m.message.clone(),
            created_at: bson::DateTime::from_millis(millis),
        }
    }
}
