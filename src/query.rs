//! Point queries: membership degree of `x` in every set of a collection.
//!
//! Both functions here take any iterator of sets, so the registry can evaluate
//! a hypothetical collection (current members plus a candidate) without
//! mutating itself.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

use crate::set::FuzzySet;

/// Result of querying one point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointQuery {
    /// Degree per set name, for sets that contribute at `x`.
    ///
    /// Sets with no opinion are absent rather than zero. When two sets share a
    /// name the later one's degree is kept, while [`sum`](Self::sum) counts both.
    pub degrees: HashMap<String, f64>,
    /// `(x, degree)` of the last contributing set, for marking on a plot.
    pub point: Option<(f64, f64)>,
    /// Sum of all contributing degrees.
    pub sum: f64,
}

impl PointQuery {
    /// True if no set contributed at the queried point.
    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// Degree recorded for `name`, if any.
    pub fn degree_of(&self, name: &str) -> Option<f64> {
        self.degrees.get(name).copied()
    }
}

/// Query `x` against every set yielded by `sets`, in iteration order.
pub fn query_point<'a, I>(sets: I, x: f64) -> PointQuery
where
    I: IntoIterator<Item = &'a FuzzySet>,
{
    let mut result = PointQuery::default();
    for set in sets {
        if let Some(degree) = set.degree(x) {
            result.degrees.insert(set.name().to_string(), degree);
            result.point = Some((x, degree));
            result.sum += degree;
        }
    }
    result
}

/// Sum of membership degrees at `x`, without building the name mapping.
///
/// Accumulates in the same order as [`query_point`], so the two always agree
/// to the bit.
pub fn membership_sum<'a, I>(sets: I, x: f64) -> f64
where
    I: IntoIterator<Item = &'a FuzzySet>,
{
    sets.into_iter().filter_map(|set| set.degree(x)).fold(0.0, |acc, d| acc + d)
}
