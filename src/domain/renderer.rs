//! Rendering interface for the disclaimer page.

use crate::domain::entities::DisclaimerPage;

/// Error raised when the disclaimer page cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(String),
}

/// Turns an accepted gate request into HTML.
///
/// # Implementations
///
/// - [`crate::infrastructure::templates::AskamaRenderer`] - Askama template
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DisclaimerRenderer: Send + Sync {
    /// Renders the full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if the template engine fails.
    fn render(&self, page: &DisclaimerPage) -> Result<String, RenderError>;
}
