//! Home page handler.
//!
//! Renders the static landing document. The template carries no substitution
//! variables, so the response body is identical across requests.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::config::HOME_TEMPLATE;
use crate::error::AppError;
use crate::state::AppState;

/// Home page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let context = tera::Context::new();
    let html = state.tera.render(HOME_TEMPLATE, &context)?;
    Ok(Html(html))
}
