//! Domain error types

use thiserror::Error;

/// Error when an audio locator fails validation
#[derive(Debug, Clone, Error)]
#[error("Invalid audio locator: \"{input}\". Expected a non-empty URL")]
pub struct InvalidLocatorError {
    pub input: String,
}
