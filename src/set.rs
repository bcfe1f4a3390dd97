//! Trapezoidal and triangular membership functions.
//!
//! # Shape
//!
//! ```text
//!  1 ┤      b────────c
//!    │     /          \
//!    │    /            \
//!  0 ┼───a──────────────d───
//! ```
//!
//! Membership ramps up over `(a, b)`, is exactly 1 over `[b, c]`, and ramps down
//! over `(c, d)`. When `b == c` the plateau collapses to a single point and the
//! set is triangular.
//!
//! # Invariants
//!
//! - Every [`FuzzySet`] satisfies `a < b <= c < d` with all four bounds finite.
//! - [`ShapeKind`] is always derived from the bounds, never stored.

use alloc::string::String;
use core::fmt;

use crate::bound::IntoBound;
use crate::error::{BoundField, ValidationError};

// ─── ShapeKind ──────────────────────────────────────────────────────────────

/// Geometric kind of a membership function, derived from its plateau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// `b == c`: single peak.
    Triangular,
    /// `b < c`: flat plateau.
    Trapezoidal,
}

impl ShapeKind {
    /// Lower-case label suitable for a table column.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Triangular => "triangular",
            ShapeKind::Trapezoidal => "trapezoidal",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── FuzzySet ───────────────────────────────────────────────────────────────

/// One named membership function over the shared numeric domain.
///
/// Constructed only through [`FuzzySet::new`] or [`FuzzySet::parse`], so the
/// ordering invariant holds for every value of this type. Sets are immutable;
/// replacing one in a registry means delete then add.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    name: String,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl FuzzySet {
    /// Build a set from already-numeric bounds.
    ///
    /// Fails with [`ValidationError::NonFinite`] for infinite or NaN bounds and
    /// [`ValidationError::Ordering`] unless `a < b <= c < d`.
    pub fn new(
        name: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) -> Result<Self, ValidationError> {
        for (value, field) in [
            (a, BoundField::A),
            (b, BoundField::B),
            (c, BoundField::C),
            (d, BoundField::D),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }
        if !(a < b && b <= c && c < d) {
            return Err(ValidationError::Ordering { a, b, c, d });
        }
        Ok(Self {
            name: name.into(),
            a,
            b,
            c,
            d,
        })
    }

    /// Build a set from raw numeric-like bounds, e.g. the text of four form fields.
    ///
    /// Bounds are converted in order `a, b, c, d`; the first failure is returned.
    pub fn parse(
        name: impl Into<String>,
        a: impl IntoBound,
        b: impl IntoBound,
        c: impl IntoBound,
        d: impl IntoBound,
    ) -> Result<Self, ValidationError> {
        let a = a.into_bound(BoundField::A)?;
        let b = b.into_bound(BoundField::B)?;
        let c = c.into_bound(BoundField::C)?;
        let d = d.into_bound(BoundField::D)?;
        Self::new(name, a, b, c, d)
    }

    /// Display name. Not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left edge of the support.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Left edge of the plateau.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Right edge of the plateau.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Right edge of the support.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The four defining points in order `[a, b, c, d]`.
    pub fn defining_points(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// `Triangular` iff `b == c`.
    pub fn shape_kind(&self) -> ShapeKind {
        if self.b == self.c {
            ShapeKind::Triangular
        } else {
            ShapeKind::Trapezoidal
        }
    }

    /// Support interval `(a, d)`; membership is zero outside it.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.d)
    }

    /// Plateau interval `(b, c)`; membership is exactly 1 inside it.
    pub fn plateau(&self) -> (f64, f64) {
        (self.b, self.c)
    }

    /// Membership degree of `x`, or `None` when this set has no opinion.
    ///
    /// ```text
    /// a < x < b   →  (x - a) / (b - a)
    /// b <= x <= c →  1
    /// c < x < d   →  (d - x) / (d - c)
    /// otherwise   →  None   (including x == a and x == d)
    /// ```
    pub fn degree(&self, x: f64) -> Option<f64> {
        if self.a < x && x < self.b {
            Some((x - self.a) / (self.b - self.a))
        } else if self.b <= x && x <= self.c {
            Some(1.0)
        } else if self.c < x && x < self.d {
            Some((self.d - x) / (self.d - self.c))
        } else {
            None
        }
    }

    /// Plot polyline `[(a, 0), (b, 1), (c, 1), (d, 0)]`.
    pub fn polyline(&self) -> [(f64, f64); 4] {
        [
            (self.a, 0.0),
            (self.b, 1.0),
            (self.c, 1.0),
            (self.d, 0.0),
        ]
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
