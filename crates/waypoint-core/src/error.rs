//! Error types and exit codes for waypoint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown or duplicate location)

use thiserror::Error;

/// Exit codes for the waypoint binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,
    /// Generic failure
    Failure = 1,
    /// Usage error (bad flags or arguments)
    Usage = 2,
    /// Data error (unknown or duplicate location)
    Data = 3,
}

/// Errors produced by the waypoint core and shell
#[derive(Debug, Error)]
pub enum WaypointError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("location already exists: {name}")]
    DuplicateLocation { name: String },

    #[error("location not found: {name}")]
    LocationNotFound { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error("session interrupted")]
    Interrupted,
}

impl WaypointError {
    /// Map this error to a process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypointError::UnknownFormat(_) | WaypointError::UsageError(_) => ExitCode::Usage,

            WaypointError::DuplicateLocation { .. } | WaypointError::LocationNotFound { .. } => {
                ExitCode::Data
            }

            WaypointError::Io(_)
            | WaypointError::Json(_)
            | WaypointError::Other(_)
            | WaypointError::Interrupted => ExitCode::Failure,
        }
    }

    /// Stable identifier for the error variant, used in JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypointError::UnknownFormat(_) => "unknown_format",
            WaypointError::UsageError(_) => "usage_error",
            WaypointError::DuplicateLocation { .. } => "duplicate_location",
            WaypointError::LocationNotFound { .. } => "location_not_found",
            WaypointError::Io(_) => "io_error",
            WaypointError::Json(_) => "json_error",
            WaypointError::Other(_) => "other",
            WaypointError::Interrupted => "interrupted",
        }
    }

    /// Render this error as a structured JSON envelope
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let err = WaypointError::DuplicateLocation {
            name: "Depot".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = WaypointError::LocationNotFound {
            name: "Depot".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = WaypointError::UsageError("bad flag".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);

        let err = WaypointError::Interrupted;
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_error_json_envelope() {
        let err = WaypointError::LocationNotFound {
            name: "Hub".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["code"], 3);
        assert_eq!(json["type"], "location_not_found");
        assert_eq!(json["message"], "location not found: Hub");
    }
}
