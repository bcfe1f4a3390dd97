//! Persisted record shape for a single fuzzy set.
//!
//! A record is exactly what a persistence collaborator stores: the name and
//! the four bounds, in registry order. The shape kind is never written and is
//! ignored if a source supplies one (legacy files carry a `type` field), since
//! the registry always re-derives it.
//!
//! ```json
//! [
//!   {"name": "Cold", "a": 0.0, "b": 2.0, "c": 2.0, "d": 4.0},
//!   {"name": "Warm", "a": 2.0, "b": 4.0, "c": 4.0, "d": 6.0, "type": "triangular"}
//! ]
//! ```
//!
//! Records are unvalidated; they become [`FuzzySet`]s only through
//! [`MembershipRegistry::load_records`](crate::registry::MembershipRegistry::load_records).

use alloc::string::{String, ToString};

use crate::set::FuzzySet;

/// Serializable representation of a [`FuzzySet`] without derived fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzySetRecord {
    /// Display name.
    pub name: String,
    /// Left edge of the support.
    pub a: f64,
    /// Left edge of the plateau.
    pub b: f64,
    /// Right edge of the plateau.
    pub c: f64,
    /// Right edge of the support.
    pub d: f64,
}

impl From<&FuzzySet> for FuzzySetRecord {
    fn from(set: &FuzzySet) -> Self {
        Self {
            name: set.name().to_string(),
            a: set.a(),
            b: set.b(),
            c: set.c(),
            d: set.d(),
        }
    }
}

impl TryFrom<FuzzySetRecord> for FuzzySet {
    type Error = crate::error::ValidationError;

    /// Checks the ordering invariant only; overlap and unity depend on a registry.
    fn try_from(record: FuzzySetRecord) -> Result<Self, Self::Error> {
        FuzzySet::new(record.name, record.a, record.b, record.c, record.d)
    }
}


#[cfg(test)]
mod conversion_tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_try_from_checks_ordering() {
        let record = FuzzySetRecord {
            name: "Bad".into(),
            a: 4.0,
            b: 2.0,
            c: 2.0,
            d: 0.0,
        };
        assert!(matches!(
            FuzzySet::try_from(record),
            Err(ValidationError::Ordering { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_record() {
        let set = FuzzySet::new("Mid", 1.0, 2.0, 3.0, 4.0).unwrap();
        let back = FuzzySet::try_from(FuzzySetRecord::from(&set)).unwrap();
        assert_eq!(back, set);
    }
}
