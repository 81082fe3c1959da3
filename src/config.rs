use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
    /// Shared secret for the admin routes. `None` keeps every admin route closed.
    pub api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongo_uri =
            non_empty("MONGO_URI").context("MONGO_URI environment variable is not set")?;
        let db_name = non_empty("DB_NAME").unwrap_or_else(|| "portfolio".into());
        let host = non_empty("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match non_empty("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {v}"))?,
            None => 8080,
        };
        let api_key = non_empty("API_KEY");

        Ok(Self {
            mongo_uri,
            db_name,
            host,
            port,
            api_key,
        })
    }
}
