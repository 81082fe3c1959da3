use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::validation::{is_valid_email, require, Validate};

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Technology as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub level: String,
    pub icon: String,
}

/// Mutable fields of a technology; the body of create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTechnology {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub icon: String,
}

impl Validate for NewTechnology {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("level", &self.level)
    }
}

/// Project owned by an experience. Replaced wholesale on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

impl Validate for NewExperience {
    fn validate(&self) -> Result<(), String> {
        require("company", &self.company)?;
        require("role", &self.role)?;
        require("period", &self.period)
    }
}

/// Contact form submission. Anything else the client sends is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !is_valid_email(self.email.trim()) {
            return Err("email must be a valid email address".into());
        }
        require("message", &self.message)
    }
}

/// Contact message as persisted; `created_at` is always server time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}
