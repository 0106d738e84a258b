//! Pixshelf-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across pixshelf:
//!
//! - **Typed IDs**: A type-safe wrapper for store-assigned image identifiers
//! - **Error Handling**: Common error taxonomy and result alias
//! - **Serde Helpers**: Base64 encoding for binary blobs in JSON bodies
//!
//! # Examples
//!
//! ```
//! use pixshelf_common::{Error, ImageId, Result};
//!
//! let id = ImageId::from(42);
//! assert_eq!(id.to_string(), "42");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("image"))
//! }
//! ```

pub mod base64blob;
pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::ImageId;
