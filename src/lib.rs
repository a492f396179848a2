//! Course Registry
//!
//! An in-memory service managing courses, students and the enrollments between
//! them, exposed as an HTTP/JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use store::Registry;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub store: Arc<Registry>,
}

impl AppState {
    /// State with an empty registry
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            store: Arc::new(Registry::new()),
        }
    }
}
