use std::sync::Arc;

use hotspot_imagekit::ImageHost;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hotspot_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Where gallery images are uploaded to and deleted from.
    pub image_host: Arc<dyn ImageHost>,
}
