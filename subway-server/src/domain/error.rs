//! Domain error types.
//!
//! These errors represent data inconsistencies in the domain layer. They are
//! distinct from catalog loading and search errors.

use super::StationId;

/// Domain-level errors for data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A segment doesn't start where the previous one ended
    #[error("segment {index} starts at {found} but the previous segment ends at {expected}")]
    SegmentsNotContiguous {
        index: usize,
        expected: StationId,
        found: StationId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::SegmentsNotContiguous {
            index: 2,
            expected: StationId::parse("herald_sq").unwrap(),
            found: StationId::parse("penn_station").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "segment 2 starts at penn_station but the previous segment ends at herald_sq"
        );
    }
}
