//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the Tera template engine used to render the home page.
#[derive(Clone)]
pub struct AppState {
    pub tera: Arc<Tera>,
}

impl AppState {
    /// Creates a new application state from the given template engine.
    pub fn new(tera: Tera) -> Self {
        Self {
            tera: Arc::new(tera),
        }
    }
}
