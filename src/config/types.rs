use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file, relative paths resolve against the working directory
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("app_database.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Highest position listed by `GET /category?list_one=<id>`
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: i64,

    /// Maximum rows returned by `GET /search`
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Seed the demo catalog when the store is empty
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Seed from this JSON fixture instead of the built-in one
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

fn default_top_products_limit() -> i64 {
    4
}

fn default_search_limit() -> u32 {
    9
}

fn default_seed() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            top_products_limit: default_top_products_limit(),
            search_limit: default_search_limit(),
            seed: default_seed(),
            fixture: None,
        }
    }
}
