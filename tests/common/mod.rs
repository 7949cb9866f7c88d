//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory catalog seeded with
//! the built-in fixture, default config, and a full [`AppContext`]. The
//! [`TestHarness::with_server`] constructor starts Axum on a random port
//! for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use catalogbot::config::Config;
use catalogbot::server::{create_router, AppContext};
use catalogbot_common::CategoryId;
use catalogbot_db::pool::{get_conn, init_memory_pool, DbPool};
use catalogbot_db::queries::categories;
use catalogbot_db::seed::{seed_if_empty, CatalogFixture};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with the demo catalog and default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new harness with a custom configuration and the demo catalog.
    pub fn with_config(config: Config) -> Self {
        let harness = Self::empty(config);
        {
            let conn = get_conn(&harness.db).expect("failed to get connection");
            seed_if_empty(&conn, &CatalogFixture::builtin().expect("builtin fixture"))
                .expect("failed to seed catalog");
        }
        harness
    }

    /// Create a harness whose store has the schema but no rows.
    pub fn empty(config: Config) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone(), config);
        Self { ctx, db }
    }

    /// Generated ID of a seeded category.
    pub fn category_id(&self, name: &str) -> CategoryId {
        let conn = get_conn(&self.db).expect("failed to get connection");
        categories::find_category_id_by_name(&conn, name)
            .expect("lookup failed")
            .unwrap_or_else(|| panic!("category {name} not seeded"))
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::serve(Self::new()).await
    }

    /// Start an Axum server for an already-built harness.
    pub async fn serve(harness: Self) -> (Self, SocketAddr) {
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
