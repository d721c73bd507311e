//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::{LineId, StationId};
use crate::planner::MalformedCatalog;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON could not be parsed
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate line {0}")]
    DuplicateLine(LineId),

    /// A station or connection uses a line missing from the line table
    #[error("{context} uses undeclared line {line}")]
    UnknownLine { line: LineId, context: String },

    /// A record field failed validation
    #[error("invalid {context}: {reason}")]
    InvalidField { context: String, reason: String },

    /// A connection references a station missing from the station list
    #[error(transparent)]
    Malformed(#[from] MalformedCatalog),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::DuplicateStation(StationId::parse("times_sq").unwrap());
        assert_eq!(err.to_string(), "duplicate station times_sq");

        let err = CatalogError::UnknownLine {
            line: LineId::parse("X").unwrap(),
            context: "connection 3".into(),
        };
        assert_eq!(err.to_string(), "connection 3 uses undeclared line X");

        let err = CatalogError::InvalidField {
            context: "station 0".into(),
            reason: "latitude without longitude".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid station 0: latitude without longitude"
        );

        let err = CatalogError::Malformed(MalformedCatalog {
            connection: 4,
            station: StationId::parse("ghost").unwrap(),
        });
        assert_eq!(
            err.to_string(),
            "connection 4 references unknown station ghost"
        );
    }
}
