//! Tera template engine initialization.

use tera::Tera;

use crate::config::{HOME_TEMPLATE, TEMPLATE_GLOB};
use crate::error::AppError;

/// Initialize the Tera template engine.
///
/// Fails at startup if the home page template is missing, rather than on the
/// first request to `/`.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;

    if !tera.get_template_names().any(|name| name == HOME_TEMPLATE) {
        return Err(AppError::Internal(format!(
            "Template '{}' not found under '{}'",
            HOME_TEMPLATE, TEMPLATE_GLOB
        )));
    }

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_loads_home_template() {
        let tera = init_templates().unwrap();
        assert!(tera.get_template_names().any(|name| name == "home.html"));
    }

    #[test]
    fn home_template_renders_without_context() {
        let tera = init_templates().unwrap();
        let html = tera.render("home.html", &tera::Context::new()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
    }
}
