//! Error adapter for converting AsterismError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic;

use asterism::AsterismError;

/// Adapter wrapping an [`AsterismError`] for rich formatting.
///
/// The adapter implements [`Diagnostic`] so that library errors carry an
/// error code, and a help hint where the user can fix the problem themselves.
pub struct ErrorAdapter<'a>(pub &'a AsterismError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AsterismError::Io(_) => "asterism::io",
            AsterismError::Geometry(_) => "asterism::geometry",
            AsterismError::Graph(_) => "asterism::graph",
            AsterismError::Layout(_) => "asterism::layout",
            AsterismError::Config(_) => "asterism::config",
            AsterismError::Records(_) => "asterism::records",
            AsterismError::Export(_) => "asterism::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            AsterismError::Config(_) => {
                "Check the configuration file for invalid or out-of-range values"
            }
            AsterismError::Records(_) => {
                "Check that the input is a JSON array of records with non-blank labels"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Wrap an [`AsterismError`] for rendering by miette.
pub fn to_reportable(err: &AsterismError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forwards_the_library_message() {
        let err = AsterismError::Graph("unknown node".to_string());

        let adapter = to_reportable(&err);

        assert_eq!(adapter.to_string(), "Graph error: unknown node");
    }

    #[test]
    fn test_code_identifies_the_error_family() {
        let err = AsterismError::Config("cool_down must be between 0 and 1".to_string());

        let adapter = to_reportable(&err);

        let code = adapter.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("asterism::config"));
    }

    #[test]
    fn test_help_offered_for_user_fixable_errors() {
        let config_err = AsterismError::Config("bad value".to_string());
        assert!(to_reportable(&config_err).help().is_some());

        let records_err = AsterismError::Records("blank label".to_string());
        assert!(to_reportable(&records_err).help().is_some());

        let io_err = AsterismError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        assert!(to_reportable(&io_err).help().is_none());
    }

    #[test]
    fn test_source_is_forwarded() {
        let io_err = AsterismError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let adapter = to_reportable(&io_err);
        assert!(std::error::Error::source(&adapter).is_some());

        let layout_err = AsterismError::Layout("did not settle".to_string());
        let adapter = to_reportable(&layout_err);
        assert!(std::error::Error::source(&adapter).is_none());
    }
}
