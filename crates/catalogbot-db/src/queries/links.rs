//! Category/product link queries.
//!
//! The link table resolves both of its uniqueness conflicts by replacement:
//! re-linking a (product, category) pair moves the product to the new
//! position, and taking a (category, position) slot evicts whoever held it.

use catalogbot_common::{CategoryId, Error, ProductId, Result};
use rusqlite::Connection;

/// Link a product into a category at the given position.
pub fn link_product(
    conn: &Connection,
    product_id: ProductId,
    category_id: CategoryId,
    position: i64,
) -> Result<()> {
    conn.execute(
        "INSERT INTO category_products (product_id, category_id, position)
         VALUES (:product_id, :category_id, :position)",
        rusqlite::named_params! {
            ":product_id": product_id.get(),
            ":category_id": category_id.get(),
            ":position": position,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(())
}

/// All links of a category as (product, position), ordered by position.
pub fn list_links(conn: &Connection, category_id: CategoryId) -> Result<Vec<(ProductId, i64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT product_id, position FROM category_products
             WHERE category_id = :category_id ORDER BY position",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let links = stmt
        .query_map(
            rusqlite::named_params! { ":category_id": category_id.get() },
            |row| Ok((ProductId::new(row.get(0)?), row.get::<_, i64>(1)?)),
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(links)
}

/// Count all links across categories.
pub fn count_links(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM category_products", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
