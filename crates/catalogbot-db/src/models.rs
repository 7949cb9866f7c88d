//! Rust models matching the catalog tables.
//!
//! Field names serialize to the keys chat-bot clients already consume
//! (`id_category`, `id_product`, ...), so the models double as response
//! records.

use catalogbot_common::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Product category model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "id_category")]
    pub id: CategoryId,
    pub name: String,
    pub image: String,
    pub description: String,
}

/// Product model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    #[serde(rename = "id_product")]
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub more_info: String,
    pub buy_link: String,
    pub description: String,
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

/// A product as seen through one category, with its display position there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub position: i64,
}

impl AsRef<Product> for RankedProduct {
    fn as_ref(&self) -> &Product {
        &self.product
    }
}

/// Insertable category data (the id is generated by the store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Insertable product data (the id is generated by the store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub more_info: String,
    #[serde(default)]
    pub buy_link: String,
}
