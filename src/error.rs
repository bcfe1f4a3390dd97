//! Error taxonomy for the membership registry.
//!
//! - [`ValidationError`]: any reason a candidate fuzzy set is refused.
//! - [`RegistryError`]: positional failures and bulk-load reporting.
//! - `PersistError`: JSON file collaborator failures (requires the `json` feature).
//!
//! A failed operation never leaves the registry partially mutated, with the
//! single documented exception of bulk loading (see
//! [`MembershipRegistry::load_records`](crate::registry::MembershipRegistry::load_records)).

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Identifies one of the four defining points of a trapezoid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundField {
    /// Left edge of the support.
    A,
    /// Left edge of the plateau.
    B,
    /// Right edge of the plateau.
    C,
    /// Right edge of the support.
    D,
}

impl fmt::Display for BoundField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoundField::A => "a",
            BoundField::B => "b",
            BoundField::C => "c",
            BoundField::D => "d",
        })
    }
}

/// Why a candidate fuzzy set was refused.
///
/// Callers that only need to know *that* validation failed can treat every
/// variant alike; the variants exist so tests and diagnostics can tell the
/// four rules apart.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    /// A bound could not be parsed as a real number.
    #[error("bound `{field}` is not a number: {input:?}")]
    Unparsable {
        /// Which bound failed.
        field: BoundField,
        /// The raw text as supplied.
        input: String,
    },

    /// A bound parsed to an infinite or NaN value.
    #[error("bound `{field}` must be finite")]
    NonFinite {
        /// Which bound failed.
        field: BoundField,
    },

    /// The bounds do not satisfy `a < b <= c < d`.
    #[error("bounds must satisfy a < b <= c < d, got a={a}, b={b}, c={c}, d={d}")]
    Ordering {
        /// Left support edge.
        a: f64,
        /// Left plateau edge.
        b: f64,
        /// Right plateau edge.
        c: f64,
        /// Right support edge.
        d: f64,
    },

    /// The candidate's support illegally overlaps an existing set.
    #[error("support overlaps existing set {existing:?} at position {index}")]
    Overlap {
        /// Position of the conflicting set in the registry.
        index: usize,
        /// Name of the conflicting set.
        existing: String,
    },

    /// Membership degrees at one of the candidate's defining points would not sum to 1.
    #[error("membership degrees at x={point} would sum to {sum}, expected 0 or 1")]
    UnitySum {
        /// The defining point that failed.
        point: f64,
        /// The membership sum observed there.
        sum: f64,
    },
}

/// Errors surfaced by registry operations other than a single `add`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RegistryError {
    /// A candidate set was refused.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete-by-position was given an index past the end.
    #[error("no fuzzy set at position {index} (registry holds {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of sets held at the time of the call.
        len: usize,
    },

    /// Bulk load stopped at a record that failed validation.
    ///
    /// Records before `index` remain loaded.
    #[error("record {index} rejected: {source}")]
    RecordRejected {
        /// 0-based position of the failing record in the input sequence.
        index: usize,
        /// Why it was refused.
        #[source]
        source: ValidationError,
    },
}

/// Failures of the JSON file collaborator.
#[cfg(feature = "json")]
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a JSON list of records.
    #[error("malformed fuzzy set file: {0}")]
    Json(#[from] serde_json::Error),

    /// The records parsed but the registry refused one of them.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_bound_field_display() {
        assert_eq!(BoundField::A.to_string(), "a");
        assert_eq!(BoundField::D.to_string(), "d");
    }

    #[test]
    fn test_record_rejected_message_includes_cause() {
        let err = RegistryError::RecordRejected {
            index: 2,
            source: ValidationError::NonFinite {
                field: BoundField::C,
            },
        };
        assert_eq!(err.to_string(), "record 2 rejected: bound `c` must be finite");
    }

    #[test]
    fn test_validation_converts_transparently() {
        let inner = ValidationError::Overlap {
            index: 0,
            existing: "Low".into(),
        };
        let err: RegistryError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}
