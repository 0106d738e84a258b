//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config,
//! and full [`AppContext`]. The [`with_server`] constructor starts Axum on a
//! random port for HTTP-level testing.

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use pixshelf::config::Config;
use pixshelf::images::ImageService;
use pixshelf::server::{create_router, AppContext};
use pixshelf_common::ImageId;
use pixshelf_db::models::NewImage;
use pixshelf_db::pool::{init_memory_pool, DbPool};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration and in-memory DB.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new harness with a custom configuration and in-memory DB.
    pub fn with_config(config: Config) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let images = Arc::new(ImageService::new(db.clone(), config.thumbnail.clone()));

        let ctx = AppContext {
            config: Arc::new(config),
            db_pool: db.clone(),
            images,
        };

        Self { ctx, db }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::with_server_config(Config::default()).await
    }

    /// Start an Axum server with custom config on a random port.
    pub async fn with_server_config(config: Config) -> (Self, SocketAddr) {
        let harness = Self::with_config(config);
        let app = create_router(harness.ctx.clone(), None);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    /// Insert an image row directly, bypassing the HTTP layer.
    #[allow(dead_code)]
    pub fn seed_image(&self, name: &str) -> ImageId {
        let conn = self.db.get().expect("failed to get connection");
        let new = NewImage {
            name: name.to_string(),
            image_pixel_data: vec![0xFF, 0xD8, 0xFF, 0x01],
            thumbnail_pixel_data: vec![0xFF, 0xD8, 0xFF, 0x02],
        };
        pixshelf_db::queries::images::insert_image(&conn, &new).expect("failed to seed image")
    }
}

/// Encode a solid-color JPEG of the given dimensions for upload tests.
#[allow(dead_code)]
pub fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([64, 128, 192]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Jpeg)
        .expect("failed to encode test jpeg");
    buf.into_inner()
}
