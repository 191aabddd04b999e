pub mod html;
pub mod terminal;

use thiserror::Error;

/// Error type for HTML template rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}
