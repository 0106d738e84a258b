//! Image repository coordinating validation, thumbnailing, and persistence.
//!
//! The service is the only writer for the `images` table: every record it
//! stores has been validated against the gallery invariants (non-empty name,
//! non-empty pixel data, non-empty thumbnail data).

use pixshelf_common::{Error, ImageId, Result};
use pixshelf_db::models::{Image, NewImage};
use pixshelf_db::pool::{get_conn, DbPool};
use pixshelf_db::queries::images;

use super::thumbnail;
use crate::config::ThumbnailConfig;

/// High-level image repository over the database pool.
pub struct ImageService {
    pool: DbPool,
    thumbnail: ThumbnailConfig,
}

impl ImageService {
    /// Create a new `ImageService`.
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `thumbnail` - Thumbnail generation parameters for uploads
    pub fn new(pool: DbPool, thumbnail: ThumbnailConfig) -> Self {
        Self { pool, thumbnail }
    }

    /// Validate and persist a new image, returning the stored record with
    /// its store-assigned id.
    pub fn add_image(&self, image: &NewImage) -> Result<Image> {
        validate(
            &image.name,
            &image.image_pixel_data,
            &image.thumbnail_pixel_data,
        )?;

        let conn = get_conn(&self.pool)?;
        let id = images::insert_image(&conn, image)?;

        Ok(Image {
            id,
            name: image.name.clone(),
            image_pixel_data: image.image_pixel_data.clone(),
            thumbnail_pixel_data: image.thumbnail_pixel_data.clone(),
        })
    }

    /// Build an in-memory image from uploaded bytes, generating the
    /// thumbnail. Does not persist; persistence is a separate explicit step.
    ///
    /// Fails with `InvalidInput` when the bytes cannot be decoded.
    pub fn parse_upload(&self, data: Vec<u8>, file_name: &str) -> Result<NewImage> {
        let thumbnail_pixel_data = thumbnail::generate(&data, &self.thumbnail)?;

        Ok(NewImage {
            name: file_name.to_string(),
            image_pixel_data: data,
            thumbnail_pixel_data,
        })
    }

    /// Look up an image by id. Unknown ids return `Ok(None)`.
    pub fn get_image(&self, id: ImageId) -> Result<Option<Image>> {
        let conn = get_conn(&self.pool)?;
        images::get_image(&conn, id)
    }

    /// Fetch every stored image. Order is unspecified.
    pub fn get_all_images(&self) -> Result<Vec<Image>> {
        let conn = get_conn(&self.pool)?;
        images::get_all_images(&conn)
    }

    /// Validate and persist the full state of an existing image.
    ///
    /// Only `name` ever changes through the HTTP surface, but the whole
    /// record is validated regardless.
    pub fn update_image(&self, image: &Image) -> Result<()> {
        validate(
            &image.name,
            &image.image_pixel_data,
            &image.thumbnail_pixel_data,
        )?;

        let conn = get_conn(&self.pool)?;
        images::update_image(&conn, image)
    }

    /// Remove an image. Removing an unknown id is a no-op.
    pub fn remove_image(&self, id: ImageId) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        images::delete_image(&conn, id)?;
        Ok(())
    }
}

/// Shared validation for create and update.
fn validate(name: &str, image_pixel_data: &[u8], thumbnail_pixel_data: &[u8]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument(
            "the image name is empty or whitespace",
        ));
    }

    if image_pixel_data.is_empty() {
        return Err(Error::invalid_argument("the image pixel data is empty"));
    }

    if thumbnail_pixel_data.is_empty() {
        return Err(Error::invalid_argument(
            "the thumbnail pixel data is empty",
        ));
    }

    Ok(())
}
