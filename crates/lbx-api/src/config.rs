use std::env;

use anyhow::{Context, bail};

/// Deployment environment, drives the tracing output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Which flashcard store backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    /// Volatile in-memory map, gone on restart.
    Memory,
    /// Postgres table behind `DATABASE_URL`.
    Postgres,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub env: Environment,
    pub storage: StorageKind,
    pub database_url: Option<String>,
    pub port: u16,
}

impl ApiConfig {
    /// Build the configuration from environment variables.
    ///
    /// `ENVIRONMENT` (`development` default | `production`), `STORAGE`
    /// (`memory` default | `postgres`), `DATABASE_URL` (required for
    /// postgres storage), `PORT` (default 3000).
    pub fn from_env() -> anyhow::Result<Self> {
        let env = match env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let storage = match env::var("STORAGE").as_deref() {
            Err(_) | Ok("memory") => StorageKind::Memory,
            Ok("postgres") => StorageKind::Postgres,
            Ok(other) => bail!("unknown STORAGE value: {other:?} (expected memory or postgres)"),
        };

        let database_url = env::var("DATABASE_URL").ok();
        if storage == StorageKind::Postgres && database_url.is_none() {
            bail!("DATABASE_URL is required when STORAGE=postgres");
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            env,
            storage,
            database_url,
            port,
        })
    }
}
