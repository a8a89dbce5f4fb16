//! Error types for the DAIN portfolio

use thiserror::Error;

/// Errors raised while talking to the rendering host.
///
/// None of these are shown to the visitor. Callers log them and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A script evaluated in the host document failed or returned garbage
    #[error("Host script failed: {0}")]
    Script(String),

    /// The host could not report whether an element is in the viewport
    #[error("Visibility observation failed: {0}")]
    Visibility(String),
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            SiteError::Script("eval channel closed".into()).to_string(),
            "Host script failed: eval channel closed"
        );
        assert_eq!(
            SiteError::Visibility("no observer".into()).to_string(),
            "Visibility observation failed: no observer"
        );
    }
}
