//! Database query modules.
//!
//! - categories: category inserts, lookups and the sorted listing
//! - products: product inserts, per-category ranking and name search
//! - links: the positioned category/product relation

pub mod categories;
pub mod links;
pub mod products;
