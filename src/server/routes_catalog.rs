//! Catalog route handlers.
//!
//! Both endpoints answer with the plain records next to a ready-to-send
//! Messenger template under `facebook_template`.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalogbot_common::{CategoryId, Error};
use catalogbot_db::models::{Category, Product, RankedProduct};
use catalogbot_db::pool::get_conn;
use catalogbot_db::queries::{categories, products};
use serde::{Deserialize, Serialize};

use crate::messenger::{self, QuickButton, Template};
use crate::server::error::AppError;
use crate::server::AppContext;

pub fn catalog_routes() -> Router<AppContext> {
    Router::new()
        .route("/category", get(get_category))
        .route("/search", get(search))
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    list_one: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
    pub facebook_template: Template,
}

#[derive(Debug, Serialize)]
pub struct CategoryProductsResponse {
    pub products: Vec<RankedProduct>,
    pub facebook_template: Template,
    pub buttons: Vec<QuickButton>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    product_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub facebook_template: Template,
}

/// Parse the `list_one` parameter. An empty value counts as absent.
fn parse_list_one(raw: Option<&str>) -> Result<Option<CategoryId>, Error> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<CategoryId>()
            .map(Some)
            .map_err(|_| Error::invalid_input("Required integer value for param 'list_one'")),
    }
}

/// GET /category
///
/// Without `list_one` this lists every category; with it, the top-ranked
/// products of that category.
async fn get_category(
    State(ctx): State<AppContext>,
    Query(params): Query<CategoryQuery>,
) -> Result<Response, AppError> {
    let category_id = parse_list_one(params.list_one.as_deref())?;
    let conn = get_conn(&ctx.db)?;

    match category_id {
        Some(id) => {
            let products = products::top_products_of_category(
                &conn,
                id,
                ctx.config.catalog.top_products_limit,
            )?;
            tracing::debug!(category = %id, count = products.len(), "Listing category products");

            let facebook_template = messenger::product_card_template(&products);
            Ok(Json(CategoryProductsResponse {
                products,
                facebook_template,
                buttons: vec![messenger::search_by_name_button()],
            })
            .into_response())
        }
        None => {
            let categories = categories::list_categories(&conn)?;
            let facebook_template = messenger::category_list_template(&categories);
            Ok(Json(CategoryListResponse {
                categories,
                facebook_template,
            })
            .into_response())
        }
    }
}

/// GET /search
async fn search(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let name = match params.product_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::invalid_input("Param 'product_name' needed").into()),
    };

    let conn = get_conn(&ctx.db)?;
    let products = products::search_products_by_name(&conn, name, ctx.config.catalog.search_limit)?;
    tracing::debug!(query = name, count = products.len(), "Product search");

    let facebook_template = messenger::product_card_template(&products);
    Ok(Json(SearchResponse {
        products,
        facebook_template,
    }))
}
