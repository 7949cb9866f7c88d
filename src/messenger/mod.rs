//! Messenger rich-message templates.
//!
//! Turns catalog rows into the attachment documents a Messenger-style chat
//! bot renders as cards: a vertical "list" of categories and a "generic"
//! carousel of products. The functions here are pure; they only read the
//! records they are given.
//!
//! # Example
//!
//! ```
//! use catalogbot::messenger::category_list_template;
//!
//! let template = category_list_template(&[]);
//! let json = serde_json::to_value(&template).unwrap();
//! assert_eq!(json["payload"]["template_type"], "list");
//! assert_eq!(json["payload"]["elements"], serde_json::json!([]));
//! ```

mod types;

pub use types::*;

use catalogbot_db::models::{Category, Product};

/// Postback payload prefix that identifies a category selection.
pub const CATEGORY_PAYLOAD_PREFIX: &str = "button_category_";

/// Postback payload sent when the user asks to search by product name.
pub const SEARCH_BY_NAME_PAYLOAD: &str = "search_by_name";

/// Build the postback payload for a category button.
pub fn category_payload(category: &Category) -> String {
    format!("{}{}", CATEGORY_PAYLOAD_PREFIX, category.id)
}

fn category_element(category: &Category) -> Element {
    Element {
        title: category.name.clone(),
        image_url: category.image.clone(),
        subtitle: category.description.clone(),
        buttons: vec![Button::Postback {
            title: "View".to_string(),
            payload: category_payload(category),
        }],
    }
}

fn product_element(product: &Product) -> Element {
    Element {
        title: product.name.clone(),
        image_url: product.image.clone(),
        subtitle: product.description.clone(),
        buttons: vec![
            Button::WebUrl {
                url: product.more_info.clone(),
                title: "More Info".to_string(),
            },
            Button::ElementShare,
            Button::WebUrl {
                url: product.buy_link.clone(),
                title: "Buy !".to_string(),
            },
        ],
    }
}

/// List template with one large-style element per category.
///
/// Elements keep the input order; callers sort beforehand.
pub fn category_list_template(categories: &[Category]) -> Template {
    Template::new(TemplatePayload {
        template_type: TemplateType::List,
        top_element_style: Some(ElementStyle::Large),
        elements: categories.iter().map(category_element).collect(),
    })
}

/// Generic card template with one element per product.
///
/// Accepts plain products as well as ranked ones.
pub fn product_card_template<P: AsRef<Product>>(products: &[P]) -> Template {
    Template::new(TemplatePayload {
        template_type: TemplateType::Generic,
        top_element_style: None,
        elements: products
            .iter()
            .map(|p| product_element(p.as_ref()))
            .collect(),
    })
}

/// Quick-reply button offered under a category's product cards.
pub fn search_by_name_button() -> QuickButton {
    QuickButton {
        title: "Search by product name".to_string(),
        kind: "postback",
        payload: SEARCH_BY_NAME_PAYLOAD.to_string(),
    }
}
