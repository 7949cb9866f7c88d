//! First-boot seeding of the catalog.
//!
//! Seed content is declarative: a [`CatalogFixture`] lists categories,
//! products, and links keyed by natural names. [`seed_if_empty`] only acts
//! when the category table is empty, so it runs at most once per store.

use std::path::Path;

use catalogbot_common::{Error, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::models::{NewCategory, NewProduct};
use crate::queries::{categories, links, products};

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/catalog.json");

/// A link between a category and a product, both named by their unique names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureLink {
    pub category: String,
    pub product: String,
    pub position: i64,
}

/// Declarative seed content for an empty store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFixture {
    #[serde(default)]
    pub categories: Vec<NewCategory>,
    #[serde(default)]
    pub products: Vec<NewProduct>,
    #[serde(default)]
    pub links: Vec<FixtureLink>,
}

impl CatalogFixture {
    /// The demonstration catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    /// Parse a fixture from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a fixture from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// False when the store already held categories and nothing was written.
    pub seeded: bool,
    pub categories: usize,
    pub products: usize,
    pub links: usize,
}

/// Seed the store from `fixture` if it has no categories yet.
///
/// Categories go in first, then products; links are written last using the
/// IDs the store generated, re-read by name. Everything happens in one
/// transaction, so a constraint violation leaves the store untouched and is
/// returned to the caller.
pub fn seed_if_empty(conn: &Connection, fixture: &CatalogFixture) -> Result<SeedReport> {
    if categories::count_categories(conn)? > 0 {
        tracing::debug!("Catalog already populated, skipping seed");
        return Ok(SeedReport::default());
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    for category in &fixture.categories {
        categories::insert_category(&tx, category)?;
    }
    for product in &fixture.products {
        products::insert_product(&tx, product)?;
    }

    for link in &fixture.links {
        let category_id = categories::find_category_id_by_name(&tx, &link.category)?
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "Seed link references unknown category '{}'",
                    link.category
                ))
            })?;
        let product_id = products::find_product_id_by_name(&tx, &link.product)?.ok_or_else(|| {
            Error::invalid_input(format!(
                "Seed link references unknown product '{}'",
                link.product
            ))
        })?;

        links::link_product(&tx, product_id, category_id, link.position)?;
    }

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    let report = SeedReport {
        seeded: true,
        categories: fixture.categories.len(),
        products: fixture.products.len(),
        links: fixture.links.len(),
    };

    tracing::info!(
        categories = report.categories,
        products = report.products,
        links = report.links,
        "Seeded catalog"
    );

    Ok(report)
}
