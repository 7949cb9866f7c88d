//! Catalogbot-Common: Shared IDs and error handling.
//!
//! This crate provides functionality used across catalogbot:
//!
//! - **Typed IDs**: Integer wrappers for categories and products
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use catalogbot_common::{CategoryId, Error, Result};
//!
//! let id: CategoryId = "3".parse().unwrap();
//! assert_eq!(id.get(), 3);
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("Param 'product_name' needed"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
