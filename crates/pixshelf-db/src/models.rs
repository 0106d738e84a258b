//! Internal Rust models matching the database schema.
//!
//! JSON serialization matches the browser contract: camelCase field names
//! and base64-encoded pixel data.

use pixshelf_common::{base64blob, ImageId};
use serde::{Deserialize, Serialize};

/// Persisted image row: the original upload plus its generated thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    #[serde(with = "base64blob")]
    pub image_pixel_data: Vec<u8>,
    #[serde(with = "base64blob")]
    pub thumbnail_pixel_data: Vec<u8>,
}

/// An image that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub name: String,
    pub image_pixel_data: Vec<u8>,
    pub thumbnail_pixel_data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_json_shape() {
        let image = Image {
            id: ImageId::from(3),
            name: "cat.jpg".to_string(),
            image_pixel_data: vec![1, 2, 3],
            thumbnail_pixel_data: vec![4, 5, 6],
        };

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "cat.jpg");
        assert_eq!(json["imagePixelData"], "AQID");
        assert_eq!(json["thumbnailPixelData"], "BAUG");
    }

    #[test]
    fn test_image_json_roundtrip() {
        let image = Image {
            id: ImageId::from(8),
            name: "dog.png".to_string(),
            image_pixel_data: vec![9, 8, 7],
            thumbnail_pixel_data: vec![6, 5],
        };

        let json = serde_json::to_string(&image).unwrap();
        let back: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
