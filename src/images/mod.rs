//! Image repository and thumbnail generation.

pub mod service;
pub mod thumbnail;

pub use service::ImageService;
