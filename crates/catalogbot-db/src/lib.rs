//! Catalogbot-DB: Catalog schema, seeding, and query operations
//!
//! This crate provides the store behind catalogbot using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//! - `seed` - First-boot seeding from a declarative fixture
//!
//! # Example
//!
//! ```
//! use catalogbot_db::pool::{init_memory_pool, get_conn};
//! use catalogbot_db::queries::categories;
//! use catalogbot_db::seed::{seed_if_empty, CatalogFixture};
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! seed_if_empty(&conn, &CatalogFixture::builtin().unwrap()).unwrap();
//! let names: Vec<String> = categories::list_categories(&conn)
//!     .unwrap()
//!     .into_iter()
//!     .map(|c| c.name)
//!     .collect();
//! assert_eq!(names, ["iPad", "iPhone", "Mac"]);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
