//! Server configuration from the environment

use std::fmt;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// `DB_URI` value selecting the in-memory stores
pub const MEMORY_DB_URI: &str = "memory://";

/// Where contacts and users live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Memory,
    Postgres(String),
}

#[derive(Clone)]
pub struct ServerConfig {
    pub database: DatabaseTarget,
    pub secret_key: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<HeaderValue>>,
}

impl ServerConfig {
    /// Read from process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = lookup("DB_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .context("DB_URI (or DATABASE_URL) must be set")?;
        let database = if uri == MEMORY_DB_URI {
            DatabaseTarget::Memory
        } else {
            DatabaseTarget::Postgres(uri)
        };

        let secret_key = lookup("SECRET_KEY").context("SECRET_KEY must be set")?;
        if secret_key.is_empty() {
            bail!("SECRET_KEY must not be empty");
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = match lookup("FRONTEND_ORIGINS") {
            Some(raw) => Some(parse_origins(&raw)?),
            None => None,
        };

        Ok(Self {
            database,
            secret_key,
            port,
            db_max_connections,
            frontend_origins,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(self.secret_key.as_bytes())
    }
}

/// Comma-separated origins; blank entries are skipped, invalid ones rejected
fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("FRONTEND_ORIGINS has an invalid origin: {origin:?}"))
        })
        .collect()
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let database = match self.database {
            DatabaseTarget::Memory => "memory",
            DatabaseTarget::Postgres(_) => "postgres",
        };
        f.debug_struct("ServerConfig")
            .field("database", &database)
            .field("secret_key", &"[REDACTED]")
            .field("port", &self.port)
            .field("db_max_connections", &self.db_max_connections)
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("DB_URI", "postgres://u:p@db/contacts"), ("SECRET_KEY", "s")]).unwrap();
        assert_eq!(
            cfg.database,
            DatabaseTarget::Postgres("postgres://u:p@db/contacts".into())
        );
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.db_max_connections, 5);
        assert!(cfg.frontend_origins.is_none());
    }

    #[test]
    fn test_memory_target_and_overrides() {
        let cfg = config(&[
            ("DB_URI", "memory://"),
            ("SECRET_KEY", "s"),
            ("PORT", "8080"),
            ("FRONTEND_ORIGINS", "http://localhost:5173, http://127.0.0.1:5173"),
        ])
        .unwrap();
        assert_eq!(cfg.database, DatabaseTarget::Memory);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.frontend_origins.unwrap().len(), 2);
    }

    #[test]
    fn test_database_url_fallback() {
        let cfg = config(&[("DATABASE_URL", "memory://"), ("SECRET_KEY", "s")]).unwrap();
        assert_eq!(cfg.database, DatabaseTarget::Memory);
    }

    #[test]
    fn test_missing_required_vars() {
        assert!(config(&[("SECRET_KEY", "s")]).is_err());
        assert!(config(&[("DB_URI", "memory://")]).is_err());
        assert!(config(&[("DB_URI", "memory://"), ("SECRET_KEY", "")]).is_err());
        assert!(config(&[("DB_URI", "memory://"), ("SECRET_KEY", "s"), ("PORT", "x")]).is_err());
    }

    #[test]
    fn test_invalid_origin_fails_startup() {
        let result = config(&[
            ("DB_URI", "memory://"),
            ("SECRET_KEY", "s"),
            ("FRONTEND_ORIGINS", "http://localhost:5173,http://bad\norigin"),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("FRONTEND_ORIGINS"));
    }

    #[test]
    fn test_trailing_comma_in_origins() {
        let cfg = config(&[
            ("DB_URI", "memory://"),
            ("SECRET_KEY", "s"),
            ("FRONTEND_ORIGINS", "http://localhost:5173,"),
        ])
        .unwrap();
        assert_eq!(cfg.frontend_origins.unwrap().len(), 1);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let cfg = config(&[
            ("DB_URI", "postgres://u:hunter2@db/c"),
            ("SECRET_KEY", "topsecret"),
        ])
        .unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(!dbg.contains("topsecret"));
    }
}
