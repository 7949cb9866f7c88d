//! Store bootstrap: open the pool and run first-boot seeding.
//!
//! Seeding completes here, before any handler can see the pool.

use anyhow::{Context, Result};
use catalogbot_db::pool::{get_conn, init_pool, DbPool};
use catalogbot_db::seed::{seed_if_empty, CatalogFixture, SeedReport};

use crate::config::Config;

/// Open the configured database, apply migrations and seed it if enabled.
pub fn init_store(config: &Config) -> Result<(DbPool, SeedReport)> {
    let db_path = config.database.path.to_string_lossy();
    tracing::info!("Initializing database at {}", db_path);

    let pool = init_pool(&db_path).context("Failed to open catalog database")?;
    let report = seed_store(&pool, config)?;

    Ok((pool, report))
}

/// Seed an already-open pool according to `config.catalog`.
pub fn seed_store(pool: &DbPool, config: &Config) -> Result<SeedReport> {
    if !config.catalog.seed {
        tracing::debug!("Seeding disabled by configuration");
        return Ok(SeedReport::default());
    }

    let fixture = match config.catalog.fixture {
        Some(ref path) => CatalogFixture::from_path(path)
            .with_context(|| format!("Failed to load seed fixture: {:?}", path))?,
        None => CatalogFixture::builtin().context("Built-in seed fixture is invalid")?,
    };

    let conn = get_conn(pool)?;
    let report = seed_if_empty(&conn, &fixture).context("Failed to seed catalog")?;

    Ok(report)
}
