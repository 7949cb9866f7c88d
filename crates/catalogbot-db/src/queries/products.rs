//! Product database queries.
//!
//! Read access goes through two shapes: the ranked listing of a single
//! category and a capped name search across the whole catalog.

use catalogbot_common::{CategoryId, Error, ProductId, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::models::{NewProduct, Product, RankedProduct};

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.image, p.more_info, p.buy_link, p.description";

fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: ProductId::new(row.get(0)?),
        name: row.get(1)?,
        image: row.get(2)?,
        more_info: row.get(3)?,
        buy_link: row.get(4)?,
        description: row.get(5)?,
    })
}

/// Insert a product and return its generated ID.
pub fn insert_product(conn: &Connection, product: &NewProduct) -> Result<ProductId> {
    conn.execute(
        "INSERT INTO products (name, image, description, more_info, buy_link)
         VALUES (:name, :image, :description, :more_info, :buy_link)",
        rusqlite::named_params! {
            ":name": product.name,
            ":image": product.image,
            ":description": product.description,
            ":more_info": product.more_info,
            ":buy_link": product.buy_link,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ProductId::new(conn.last_insert_rowid()))
}

/// Get a product by ID.
pub fn get_product(conn: &Connection, id: ProductId) -> Result<Option<Product>> {
    conn.query_row(
        &format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        row_to_product,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Look up the generated ID of a product by its unique name.
pub fn find_product_id_by_name(conn: &Connection, name: &str) -> Result<Option<ProductId>> {
    conn.query_row(
        "SELECT id FROM products WHERE name = :name",
        rusqlite::named_params! { ":name": name },
        |row| row.get::<_, i64>(0),
    )
    .optional()
    .map(|id| id.map(ProductId::new))
    .map_err(|e| Error::database(e.to_string()))
}

/// Products of a category whose position is at most `max_position`.
///
/// `max_position` is a rank ceiling, not a row count: with positions
/// 1, 5, 9 and a ceiling of 4 only the first product comes back. Results
/// are ordered by position. An unknown category yields an empty list.
pub fn top_products_of_category(
    conn: &Connection,
    category_id: CategoryId,
    max_position: i64,
) -> Result<Vec<RankedProduct>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PRODUCT_COLUMNS}, cp.position
             FROM products p
             INNER JOIN category_products cp ON p.id = cp.product_id
             WHERE cp.category_id = :category_id AND cp.position <= :max_position
             ORDER BY cp.position ASC"
        ))
        .map_err(|e| Error::database(e.to_string()))?;

    let products = stmt
        .query_map(
            rusqlite::named_params! {
                ":category_id": category_id.get(),
                ":max_position": max_position,
            },
            |row| {
                Ok(RankedProduct {
                    product: row_to_product(row)?,
                    position: row.get(6)?,
                })
            },
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(products)
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Search products whose name contains `needle`, returning at most `limit` rows.
///
/// Matching is case-insensitive for ASCII letters (SQLite `LIKE`). Rows come
/// back in storage order.
pub fn search_products_by_name(conn: &Connection, needle: &str, limit: u32) -> Result<Vec<Product>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p
             WHERE p.name LIKE '%' || :needle || '%' ESCAPE '\\'
             LIMIT :limit"
        ))
        .map_err(|e| Error::database(e.to_string()))?;

    let products = stmt
        .query_map(
            rusqlite::named_params! {
                ":needle": escape_like(needle),
                ":limit": limit,
            },
            row_to_product,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCategory;
    use crate::pool::{get_conn, init_memory_pool};
    use crate::queries::{categories, links};

    fn new_product(name: &str) -> NewProduct {
        let slug = name.to_lowercase().replace(' ', "-");
        NewProduct {
            name: name.to_string(),
            image: format!("http://images.example.com/{slug}.png"),
            description: format!("Description of {name}"),
            more_info: format!("http://www.example.com/{slug}/"),
            buy_link: format!("http://www.example.com/shop/{slug}"),
        }
    }

    fn new_category(conn: &Connection, name: &str) -> CategoryId {
        categories::insert_category(
            conn,
            &NewCategory {
                name: name.to_string(),
                image: String::new(),
                description: String::new(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_get_product() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let id = insert_product(&conn, &new_product("iPad Pro")).unwrap();
        let product = get_product(&conn, id).unwrap().unwrap();

        assert_eq!(product.name, "iPad Pro");
        assert_eq!(product.more_info, "http://www.example.com/ipad-pro/");
        assert_eq!(product.buy_link, "http://www.example.com/shop/ipad-pro");
        assert_eq!(find_product_id_by_name(&conn, "iPad Pro").unwrap(), Some(id));
    }

    #[test]
    fn test_top_products_ordered_by_position() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let mac = new_category(&conn, "Mac");
        let macbook = insert_product(&conn, &new_product("MacBook")).unwrap();
        let pro = insert_product(&conn, &new_product("MacBook Pro")).unwrap();
        let imac = insert_product(&conn, &new_product("iMac")).unwrap();
        let mac_pro = insert_product(&conn, &new_product("Mac Pro")).unwrap();

        links::link_product(&conn, macbook, mac, 2).unwrap();
        links::link_product(&conn, pro, mac, 1).unwrap();
        links::link_product(&conn, imac, mac, 4).unwrap();
        links::link_product(&conn, mac_pro, mac, 3).unwrap();

        let top = top_products_of_category(&conn, mac, 4).unwrap();
        let names: Vec<&str> = top.iter().map(|p| p.product.name.as_str()).collect();
        assert_eq!(names, vec!["MacBook Pro", "MacBook", "Mac Pro", "iMac"]);
        let positions: Vec<i64> = top.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_top_products_is_position_threshold() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let cat = new_category(&conn, "Sparse");
        for (name, position) in [("A", 1), ("B", 5), ("C", 9), ("D", 4)] {
            let id = insert_product(&conn, &new_product(name)).unwrap();
            links::link_product(&conn, id, cat, position).unwrap();
        }

        let top = top_products_of_category(&conn, cat, 4).unwrap();
        let names: Vec<&str> = top.iter().map(|p| p.product.name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);

        let top = top_products_of_category(&conn, cat, 100).unwrap();
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn test_top_products_scoped_to_category() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let ipad = new_category(&conn, "iPad");
        let deals = new_category(&conn, "Deals");
        let air = insert_product(&conn, &new_product("iPad Air 2")).unwrap();
        let mini = insert_product(&conn, &new_product("iPad mini 4")).unwrap();

        links::link_product(&conn, air, ipad, 1).unwrap();
        links::link_product(&conn, mini, ipad, 2).unwrap();
        links::link_product(&conn, mini, deals, 1).unwrap();

        let deals_top = top_products_of_category(&conn, deals, 4).unwrap();
        assert_eq!(deals_top.len(), 1);
        assert_eq!(deals_top[0].product.id, mini);
        assert_eq!(deals_top[0].position, 1);

        let ipad_top = top_products_of_category(&conn, ipad, 4).unwrap();
        assert_eq!(ipad_top.len(), 2);
    }

    #[test]
    fn test_top_products_unknown_category_or_zero_limit() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let cat = new_category(&conn, "Mac");
        let id = insert_product(&conn, &new_product("MacBook")).unwrap();
        links::link_product(&conn, id, cat, 1).unwrap();

        assert!(top_products_of_category(&conn, CategoryId::new(404), 4)
            .unwrap()
            .is_empty());
        assert!(top_products_of_category(&conn, cat, 0).unwrap().is_empty());
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        for name in ["iPad Pro", "iPad Air 2", "iPad mini 4", "iPhone 7", "MacBook"] {
            insert_product(&conn, &new_product(name)).unwrap();
        }

        let mut names: Vec<String> = search_products_by_name(&conn, "ipad", 9)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["iPad Air 2", "iPad Pro", "iPad mini 4"]);

        let hits = search_products_by_name(&conn, "BOOK", 9).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "MacBook");
    }

    #[test]
    fn test_search_respects_limit() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        for i in 0..12 {
            insert_product(&conn, &new_product(&format!("Cable {i}"))).unwrap();
        }

        let hits = search_products_by_name(&conn, "cable", 9).unwrap();
        assert_eq!(hits.len(), 9);
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("cable")));

        assert!(search_products_by_name(&conn, "cable", 0).unwrap().is_empty());
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        insert_product(&conn, &new_product("iPhone SE")).unwrap();
        assert!(search_products_by_name(&conn, "Watch", 9).unwrap().is_empty());
    }

    #[test]
    fn test_search_wildcards_match_literally() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        insert_product(&conn, &new_product("100% Cotton Case")).unwrap();
        insert_product(&conn, &new_product("USB_C Adapter")).unwrap();
        insert_product(&conn, &new_product("USB-C Cable")).unwrap();

        let hits = search_products_by_name(&conn, "%", 9).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Cotton Case");

        let hits = search_products_by_name(&conn, "usb_c", 9).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "USB_C Adapter");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("iPad"), "iPad");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
