//! The membership registry: an ordered, validated collection of fuzzy sets.
//!
//! # Invariants
//!
//! - **Partition**: at every defining point of every accepted set, the membership
//!   degrees across the collection (as it stood when that set was accepted) sum
//!   to exactly 0 or to 1 within [`RegistryConfig::unity_tolerance`].
//! - **Atomic add**: a refused candidate leaves sets and bounds value-for-value
//!   unchanged. Validation runs against a chained view of the current members
//!   plus the candidate; nothing is appended until every check has passed.
//! - **Derived bounds**: [`DomainBounds`] is recomputed after every mutation and
//!   is `None` exactly when the registry is empty.
//! - Deletion never re-validates. Removing a set may leave gaps in the
//!   partition; that is permitted.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use tracing::{debug, warn};

use crate::bound::IntoBound;
use crate::error::{RegistryError, ValidationError};
use crate::predicate::{sum_is_unity, supports_illegally_overlap};
use crate::query::{membership_sum, query_point, PointQuery};
use crate::record::FuzzySetRecord;
use crate::set::FuzzySet;

// ─── Configuration ──────────────────────────────────────────────────────────

/// Tunable validation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    /// Largest accepted distance between a non-zero membership sum and 1.
    ///
    /// Default `f64::EPSILON`.
    pub unity_tolerance: f64,
}

impl RegistryConfig {
    /// Construct the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            unity_tolerance: f64::EPSILON,
        }
    }
}

// ─── Domain bounds ──────────────────────────────────────────────────────────

/// Intended visible/query domain, derived from the current members.
///
/// - `left`: the `b` of the set with the smallest `a`.
/// - `right`: the `c` of the set with the largest `d`.
///
/// Ties go to the first set encountered in registry order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainBounds {
    /// Left axis limit.
    pub left: f64,
    /// Right axis limit.
    pub right: f64,
}

impl DomainBounds {
    fn of<'a>(sets: impl IntoIterator<Item = &'a FuzzySet>) -> Option<Self> {
        let mut sets = sets.into_iter();
        let first = sets.next()?;
        let mut smallest = first.a();
        let mut biggest = first.d();
        let mut bounds = DomainBounds {
            left: first.b(),
            right: first.c(),
        };
        for set in sets {
            if set.a() < smallest {
                smallest = set.a();
                bounds.left = set.b();
            }
            if set.d() > biggest {
                biggest = set.d();
                bounds.right = set.c();
            }
        }
        Some(bounds)
    }
}

// ─── MembershipRegistry ─────────────────────────────────────────────────────

/// Ordered collection of fuzzy sets forming a fuzzy partition.
///
/// Insertion order is display and iteration order. Sets are added one at a
/// time through [`add`](Self::add), removed by position or all at once, and
/// never mutated in place.
///
/// ```rust
/// use fuzzset_core::registry::MembershipRegistry;
///
/// let mut registry = MembershipRegistry::new();
/// registry.add("Cold", 0.0, 2.0, 2.0, 4.0).unwrap();
/// registry.add("Warm", "2", "4", "4", "6").unwrap();
///
/// let q = registry.query_point(3.0);
/// assert_eq!(q.degree_of("Cold"), Some(0.5));
/// assert_eq!(q.degree_of("Warm"), Some(0.5));
/// assert_eq!(q.sum, 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MembershipRegistry {
    sets: Vec<FuzzySet>,
    bounds: Option<DomainBounds>,
    config: RegistryConfig,
}

impl MembershipRegistry {
    /// Construct an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            sets: Vec::new(),
            bounds: None,
            config,
        }
    }

    // ── Mutation ───────────────────────────────────────────────────────────

    /// Validate and append a new fuzzy set.
    ///
    /// Bounds may be numbers or text (see [`IntoBound`]). The candidate is
    /// refused if any bound is malformed, if `a < b <= c < d` fails, if its
    /// support illegally overlaps an existing member, or if the membership sum
    /// at any of its four defining points would be neither 0 nor 1.
    ///
    /// On success the derived bounds are recomputed and the stored set is
    /// returned. On failure nothing changes.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        a: impl IntoBound,
        b: impl IntoBound,
        c: impl IntoBound,
        d: impl IntoBound,
    ) -> Result<&FuzzySet, ValidationError> {
        let candidate = FuzzySet::parse(name, a, b, c, d)?;
        self.insert(candidate)
    }

    /// Validate and append an already-constructed set.
    pub fn insert(&mut self, candidate: FuzzySet) -> Result<&FuzzySet, ValidationError> {
        if let Err(e) = self.validate(&candidate) {
            debug!(set = candidate.name(), error = %e, "fuzzy set rejected");
            return Err(e);
        }
        debug!(
            set = candidate.name(),
            a = candidate.a(),
            b = candidate.b(),
            c = candidate.c(),
            d = candidate.d(),
            kind = %candidate.shape_kind(),
            "fuzzy set accepted"
        );
        let index = self.sets.len();
        self.sets.push(candidate);
        self.recompute_bounds();
        Ok(&self.sets[index])
    }

    /// Run the overlap and unity checks for `candidate` without committing it.
    ///
    /// Checks run in order: overlap against each member in registry order,
    /// then the membership sum at `a`, `b`, `c`, `d`. The first failure wins.
    pub fn validate(&self, candidate: &FuzzySet) -> Result<(), ValidationError> {
        if let Some((index, existing)) = self
            .sets
            .iter()
            .enumerate()
            .find(|(_, existing)| supports_illegally_overlap(candidate, existing))
        {
            return Err(ValidationError::Overlap {
                index,
                existing: existing.name().into(),
            });
        }

        for point in candidate.defining_points() {
            let sum = membership_sum(self.sets.iter().chain(iter::once(candidate)), point);
            if !sum_is_unity(sum, self.config.unity_tolerance) {
                return Err(ValidationError::UnitySum { point, sum });
            }
        }
        Ok(())
    }

    /// Remove and return the set at `index` (0-based, current order).
    ///
    /// Remaining sets are not re-validated.
    pub fn delete_at(&mut self, index: usize) -> Result<FuzzySet, RegistryError> {
        let len = self.sets.len();
        if index >= len {
            return Err(RegistryError::IndexOutOfRange { index, len });
        }
        let removed = self.sets.remove(index);
        self.recompute_bounds();
        debug!(index, set = removed.name(), "fuzzy set deleted");
        Ok(removed)
    }

    /// Remove every set. Derived bounds become `None`.
    pub fn clear(&mut self) {
        debug!(count = self.sets.len(), "registry cleared");
        self.sets.clear();
        self.bounds = None;
    }

    /// Replay [`insert`](Self::insert) for each record in order.
    ///
    /// Any derived shape field carried by the source has already been dropped
    /// by [`FuzzySetRecord`]; the kind is always recomputed.
    ///
    /// Stops at the first record that fails and returns
    /// [`RegistryError::RecordRejected`]. Records accepted before the failure
    /// **stay loaded**: there is no rollback across the batch, so a caller that
    /// wants all-or-nothing semantics should [`clear`](Self::clear) and retry,
    /// or load into a scratch registry first.
    ///
    /// Returns the number of records loaded.
    pub fn load_records<I>(&mut self, records: I) -> Result<usize, RegistryError>
    where
        I: IntoIterator<Item = FuzzySetRecord>,
    {
        let mut loaded = 0;
        for (index, record) in records.into_iter().enumerate() {
            let result = FuzzySet::try_from(record).and_then(|set| self.insert(set).map(|_| ()));
            if let Err(source) = result {
                warn!(index, loaded, error = %source, "bulk load stopped on rejected record");
                return Err(RegistryError::RecordRejected { index, source });
            }
            loaded += 1;
        }
        debug!(loaded, "bulk load complete");
        Ok(loaded)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Membership degree of `x` in every set. Never mutates the registry.
    pub fn query_point(&self, x: f64) -> PointQuery {
        query_point(&self.sets, x)
    }

    /// Derived domain bounds, or `None` when empty.
    pub fn domain_bounds(&self) -> Option<DomainBounds> {
        self.bounds
    }

    /// Left domain bound, or `None` when empty.
    pub fn domain_left(&self) -> Option<f64> {
        self.bounds.map(|b| b.left)
    }

    /// Right domain bound, or `None` when empty.
    pub fn domain_right(&self) -> Option<f64> {
        self.bounds.map(|b| b.right)
    }

    // ── Collection helpers ─────────────────────────────────────────────────

    /// Number of sets held.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True if no sets are held.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The set at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FuzzySet> {
        self.sets.get(index)
    }

    /// All sets in registry order.
    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    /// Iterate over all sets in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &FuzzySet> {
        self.sets.iter()
    }

    /// Persistable records for every set, in registry order, without derived fields.
    pub fn records(&self) -> Vec<FuzzySetRecord> {
        self.sets.iter().map(FuzzySetRecord::from).collect()
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn recompute_bounds(&mut self) {
        self.bounds = DomainBounds::of(&self.sets);
    }
}

impl<'a> IntoIterator for &'a MembershipRegistry {
    type Item = &'a FuzzySet;
    type IntoIter = core::slice::Iter<'a, FuzzySet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
