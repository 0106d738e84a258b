//! Query functions over the pixshelf schema.

pub mod images;
