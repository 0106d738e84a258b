//! Image database queries.
//!
//! CRUD operations over the `images` table. Only one entity type exists in
//! this schema, so these are concrete functions rather than a generic
//! data-access layer.

use rusqlite::Connection;
use pixshelf_common::{Error, ImageId, Result};

use crate::models::{Image, NewImage};

/// Parse an image from a database row.
///
/// Expects columns in order: id, name, image_pixel_data, thumbnail_pixel_data.
fn parse_image_row(row: &rusqlite::Row) -> rusqlite::Result<Image> {
    Ok(Image {
        id: ImageId::from(row.get::<_, i64>(0)?),
        name: row.get(1)?,
        image_pixel_data: row.get(2)?,
        thumbnail_pixel_data: row.get(3)?,
    })
}

/// Insert a new image record.
///
/// The store assigns the identifier; the returned [`ImageId`] is the rowid
/// of the inserted record.
pub fn insert_image(conn: &Connection, image: &NewImage) -> Result<ImageId> {
    conn.execute(
        "INSERT INTO images (name, image_pixel_data, thumbnail_pixel_data)
         VALUES (:name, :image_pixel_data, :thumbnail_pixel_data)",
        rusqlite::named_params! {
            ":name": &image.name,
            ":image_pixel_data": &image.image_pixel_data,
            ":thumbnail_pixel_data": &image.thumbnail_pixel_data,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ImageId::from(conn.last_insert_rowid()))
}

/// Get an image by ID.
///
/// Returns `Ok(None)` when the id is unknown; an unknown id is never an error.
pub fn get_image(conn: &Connection, id: ImageId) -> Result<Option<Image>> {
    let result = conn.query_row(
        "SELECT id, name, image_pixel_data, thumbnail_pixel_data
         FROM images WHERE id = :id",
        rusqlite::named_params! { ":id": id.as_i64() },
        parse_image_row,
    );

    match result {
        Ok(image) => Ok(Some(image)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get all images. Row order is unspecified.
pub fn get_all_images(conn: &Connection) -> Result<Vec<Image>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, image_pixel_data, thumbnail_pixel_data
             FROM images",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let images = stmt
        .query_map([], parse_image_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(images)
}

/// Persist the full current state of an image, keyed by its identifier.
///
/// Fails with `InvalidArgument` when no row carries the image's id.
pub fn update_image(conn: &Connection, image: &Image) -> Result<()> {
    let rows_affected = conn
        .execute(
            "UPDATE images
             SET name = :name,
                 image_pixel_data = :image_pixel_data,
                 thumbnail_pixel_data = :thumbnail_pixel_data
             WHERE id = :id",
            rusqlite::named_params! {
                ":id": image.id.as_i64(),
                ":name": &image.name,
                ":image_pixel_data": &image.image_pixel_data,
                ":thumbnail_pixel_data": &image.thumbnail_pixel_data,
            },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if rows_affected == 0 {
        return Err(Error::invalid_argument(format!(
            "no image with id {}",
            image.id
        )));
    }

    Ok(())
}

/// Delete an image by ID.
///
/// Returns `Ok(false)` when the row did not exist; deleting an unknown id
/// is a no-op, not an error.
pub fn delete_image(conn: &Connection, id: ImageId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM images WHERE id = :id",
            rusqlite::named_params! { ":id": id.as_i64() },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}
