//! Error adapter for converting TrellisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Trellis
//! errors carry no source spans (there is no DSL parser behind them), so the
//! adapter contributes error codes and help text only.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use trellis::TrellisError;

/// Adapter wrapping a [`TrellisError`] to implement [`MietteDiagnostic`]
/// for rich error formatting in the CLI.
pub struct ErrorAdapter(pub TrellisError);

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Schema(_) => "trellis::schema",
            TrellisError::Config(_) => "trellis::config",
            TrellisError::Export(_) => "trellis::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            TrellisError::Schema(_) => Some(Box::new(
                "check that every table is listed in exactly one domain",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_code_and_help() {
        let adapter = ErrorAdapter(TrellisError::Schema("duplicate table".into()));

        assert_eq!(adapter.code().unwrap().to_string(), "trellis::schema");
        assert!(adapter.help().is_some());
        assert_eq!(adapter.to_string(), "Schema error: duplicate table");
    }

    #[test]
    fn test_io_error_has_no_help() {
        let adapter = ErrorAdapter(TrellisError::Io(std::io::Error::other("boom")));

        assert_eq!(adapter.code().unwrap().to_string(), "trellis::io");
        assert!(adapter.help().is_none());
    }
}
