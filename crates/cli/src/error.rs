//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library errors found in an `anyhow` chain to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use scrolly_client::ClientError;
use scrolly_config::ConfigError;
use scrolly_config::keybind::KeybindError;

use crate::commands::check::ShadowedBindings;
use crate::server::ServeError;
use crate::shutdown::Cancelled;

/// Structured exit codes for scrolly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Connection error - the presentation server could not be reached,
    /// or no local port could be bound.
    ConnectionError = 3,

    /// A file or directory given on the command line does not exist.
    NotFound = 4,

    /// Validation error - unparseable or invalid hotkey configuration.
    ValidationError = 5,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,
            ClientError::ApiError { status, .. } if ClientError::is_not_found_status(*status) => {
                ExitCode::NotFound
            }
            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ExitCode::NotFound
            }
            ConfigError::Read { .. } => ExitCode::GeneralError,
            ConfigError::Parse { .. } => ExitCode::ValidationError,
            ConfigError::Unavailable { status, .. }
                if ClientError::is_not_found_status(*status) =>
            {
                ExitCode::NotFound
            }
            ConfigError::Unavailable { .. } => ExitCode::GeneralError,
            ConfigError::Fetch { .. } => ExitCode::ConnectionError,
        }
    }
}

impl From<&ServeError> for ExitCode {
    fn from(err: &ServeError) -> Self {
        match err {
            ServeError::SiteDirMissing(_) => ExitCode::NotFound,
            ServeError::NoAvailablePort { .. } => ExitCode::ConnectionError,
            ServeError::Io(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<Cancelled>().is_some() {
                return ExitCode::Interrupted;
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ServeError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<KeybindError>().is_some()
                || cause.downcast_ref::<ShadowedBindings>().is_some()
            {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_client_error() {
        let err = ClientError::InvalidUrl("nope".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);

        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost/hotkeys.yaml".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_from_config_error() {
        let err = ConfigError::Read {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_anyhow_chain_with_context() {
        let err = anyhow::Error::new(KeybindError::EmptyMarker {
            key: "c".to_string(),
        })
        .context("Invalid hotkeys.yaml");
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_cancelled_is_interrupted() {
        let err = anyhow::Error::new(Cancelled);
        assert_eq!(err.exit_code(), ExitCode::Interrupted);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_serve_errors() {
        let err = ServeError::NoAvailablePort {
            start: 8080,
            end: 8180,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }
}
