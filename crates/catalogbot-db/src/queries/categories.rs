//! Category database queries.

use catalogbot_common::{CategoryId, Error, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::models::{Category, NewCategory};

const CATEGORY_COLUMNS: &str = "id, name, image, description";

fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: CategoryId::new(row.get(0)?),
        name: row.get(1)?,
        image: row.get(2)?,
        description: row.get(3)?,
    })
}

/// Insert a category and return its generated ID.
///
/// Fails with a database error if the name is already taken.
pub fn insert_category(conn: &Connection, category: &NewCategory) -> Result<CategoryId> {
    conn.execute(
        "INSERT INTO categories (name, image, description)
         VALUES (:name, :image, :description)",
        rusqlite::named_params! {
            ":name": category.name,
            ":image": category.image,
            ":description": category.description,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(CategoryId::new(conn.last_insert_rowid()))
}

/// List all categories sorted by name.
///
/// Names compare case-insensitively, so "iPad" sorts before "Mac"; names
/// differing only in case fall back to binary order.
pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories
             ORDER BY name COLLATE NOCASE ASC, name ASC"
        ))
        .map_err(|e| Error::database(e.to_string()))?;

    let categories = stmt
        .query_map([], row_to_category)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(categories)
}

/// Get a category by ID.
pub fn get_category(conn: &Connection, id: CategoryId) -> Result<Option<Category>> {
    conn.query_row(
        &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        row_to_category,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Look up the generated ID of a category by its unique name.
pub fn find_category_id_by_name(conn: &Connection, name: &str) -> Result<Option<CategoryId>> {
    conn.query_row(
        "SELECT id FROM categories WHERE name = :name",
        rusqlite::named_params! { ":name": name },
        |row| row.get::<_, i64>(0),
    )
    .optional()
    .map(|id| id.map(CategoryId::new))
    .map_err(|e| Error::database(e.to_string()))
}

/// Count stored categories.
pub fn count_categories(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{get_conn, init_memory_pool};

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            image: format!("http://images.example.com/{}.png", name.to_lowercase()),
            description: format!("This is a short description for {}", name),
        }
    }

    #[test]
    fn test_insert_and_get_category() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let id = insert_category(&conn, &new_category("Mac")).unwrap();
        let category = get_category(&conn, id).unwrap().unwrap();

        assert_eq!(category.id, id);
        assert_eq!(category.name, "Mac");
        assert_eq!(category.description, "This is a short description for Mac");
    }

    #[test]
    fn test_get_missing_category() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        assert!(get_category(&conn, CategoryId::new(99)).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        insert_category(&conn, &new_category("Mac")).unwrap();
        let err = insert_category(&conn, &new_category("Mac")).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert_eq!(count_categories(&conn).unwrap(), 1);
    }

    #[test]
    fn test_list_categories_sorted_by_name() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        for name in ["Mac", "iPad", "iPhone", "Accessories"] {
            insert_category(&conn, &new_category(name)).unwrap();
        }

        let names: Vec<String> = list_categories(&conn)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Accessories", "iPad", "iPhone", "Mac"]);
    }

    #[test]
    fn test_list_categories_returns_every_row_once() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let mut inserted = Vec::new();
        for name in ["TV", "Watch", "Music"] {
            inserted.push(insert_category(&conn, &new_category(name)).unwrap());
        }

        let mut listed: Vec<CategoryId> =
            list_categories(&conn).unwrap().into_iter().map(|c| c.id).collect();
        listed.sort();
        inserted.sort();
        assert_eq!(listed, inserted);
    }

    #[test]
    fn test_list_categories_empty() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        assert!(list_categories(&conn).unwrap().is_empty());
        assert_eq!(count_categories(&conn).unwrap(), 0);
    }

    #[test]
    fn test_find_category_id_by_name() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let id = insert_category(&conn, &new_category("iPhone")).unwrap();
        assert_eq!(find_category_id_by_name(&conn, "iPhone").unwrap(), Some(id));
        assert_eq!(find_category_id_by_name(&conn, "iphone").unwrap(), None);
    }
}
