//! Python FFI bindings via PyO3.
//!
//! Exposes the membership registry to a Python presentation layer (form, list
//! view, plot). Bounds may be passed as numbers or as the raw text of a form
//! field; parsing happens on the Rust side.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from fuzzset_core import MembershipRegistry
//!
//! registry = MembershipRegistry()
//! registry.add("Cold", "0", "2", "2", "4")
//! registry.add("Warm", 2, 4, 4, 6)
//!
//! degrees, point, total = registry.query_point(3.0)
//! print(degrees)                  # {'Cold': 0.5, 'Warm': 0.5}
//! print(registry.domain_bounds()) # (2.0, 4.0)
//! for s in registry.sets():
//!     xs, ys = zip(*s.polyline())
//! ```

use std::collections::HashMap;

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::bound::IntoBound;
use crate::error::{BoundField, RegistryError, ValidationError};
use crate::record::FuzzySetRecord;
use crate::registry::MembershipRegistry;
use crate::set::FuzzySet;

// ── Bound input ───────────────────────────────────────────────────────────────

/// A bound as received from Python: a number or form-field text.
#[derive(FromPyObject)]
pub enum PyBound {
    /// `int` or `float`.
    Number(f64),
    /// `str`, parsed on the Rust side.
    Text(String),
}

impl IntoBound for PyBound {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        match self {
            PyBound::Number(value) => value.into_bound(field),
            PyBound::Text(text) => text.into_bound(field),
        }
    }
}

fn validation_err(e: ValidationError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn registry_err(e: RegistryError) -> PyErr {
    match e {
        RegistryError::IndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

// ── FuzzySet ──────────────────────────────────────────────────────────────────

/// One membership function (read-only).
#[pyclass(name = "FuzzySet")]
#[derive(Clone)]
pub struct PyFuzzySet {
    inner: FuzzySet,
}

#[pymethods]
impl PyFuzzySet {
    /// Display name.
    #[getter]
    pub fn name(&self) -> &str {
        self.inner.name()
    }
    /// Left edge of the support.
    #[getter]
    pub fn a(&self) -> f64 {
        self.inner.a()
    }
    /// Left edge of the plateau.
    #[getter]
    pub fn b(&self) -> f64 {
        self.inner.b()
    }
    /// Right edge of the plateau.
    #[getter]
    pub fn c(&self) -> f64 {
        self.inner.c()
    }
    /// Right edge of the support.
    #[getter]
    pub fn d(&self) -> f64 {
        self.inner.d()
    }

    /// "triangular" or "trapezoidal".
    #[getter]
    pub fn shape_kind(&self) -> &'static str {
        self.inner.shape_kind().label()
    }

    /// Membership degree of `x`, or None outside the support.
    pub fn degree(&self, x: f64) -> Option<f64> {
        self.inner.degree(x)
    }

    /// Plot vertices [(a, 0), (b, 1), (c, 1), (d, 0)].
    pub fn polyline(&self) -> [(f64, f64); 4] {
        self.inner.polyline()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "FuzzySet(name={:?}, a={}, b={}, c={}, d={}, kind={})",
            self.inner.name(),
            self.inner.a(),
            self.inner.b(),
            self.inner.c(),
            self.inner.d(),
            self.inner.shape_kind(),
        )
    }
}

// ── MembershipRegistry ───────────────────────────────────────────────────────

/// Ordered, validated collection of fuzzy sets.
///
/// Example::
///
///     registry = MembershipRegistry()
///     registry.add("Low", "0", "2", "2", "4")
///     registry.add("High", "4", "6", "6", "8")
///     registry.domain_bounds()   # → (2.0, 6.0)
///     registry.delete_at(0)
#[pyclass(name = "MembershipRegistry")]
pub struct PyMembershipRegistry {
    inner: MembershipRegistry,
}

#[pymethods]
impl PyMembershipRegistry {
    /// Create an empty registry.
    ///
    /// Args:
    ///     unity_tolerance: accepted distance of a membership sum from 1 (default f64 epsilon)
    #[new]
    #[pyo3(signature = (unity_tolerance=None))]
    pub fn new(unity_tolerance: Option<f64>) -> Self {
        let mut config = crate::registry::RegistryConfig::default();
        if let Some(tolerance) = unity_tolerance {
            config.unity_tolerance = tolerance;
        }
        Self {
            inner: MembershipRegistry::with_config(config),
        }
    }

    /// Validate and append a fuzzy set. Raises ValueError if refused.
    pub fn add(
        &mut self,
        name: String,
        a: PyBound,
        b: PyBound,
        c: PyBound,
        d: PyBound,
    ) -> PyResult<PyFuzzySet> {
        self.inner
            .add(name, a, b, c, d)
            .map(|set| PyFuzzySet { inner: set.clone() })
            .map_err(validation_err)
    }

    /// Remove the set at `index`. Raises IndexError if out of range.
    pub fn delete_at(&mut self, index: usize) -> PyResult<PyFuzzySet> {
        self.inner
            .delete_at(index)
            .map(|inner| PyFuzzySet { inner })
            .map_err(registry_err)
    }

    /// Remove every set.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Query a point.
    ///
    /// Returns:
    ///     (degrees: dict[str, float], point: tuple[float, float] | None, sum: float)
    pub fn query_point(&self, x: f64) -> (HashMap<String, f64>, Option<(f64, f64)>, f64) {
        let q = self.inner.query_point(x);
        (q.degrees.into_iter().collect(), q.point, q.sum)
    }

    /// (left, right) axis limits, or None when empty.
    pub fn domain_bounds(&self) -> Option<(f64, f64)> {
        self.inner.domain_bounds().map(|b| (b.left, b.right))
    }

    /// All sets in registry order.
    pub fn sets(&self) -> Vec<PyFuzzySet> {
        self.inner
            .iter()
            .map(|set| PyFuzzySet { inner: set.clone() })
            .collect()
    }

    /// Records as (name, a, b, c, d) tuples, for a persistence layer.
    pub fn records(&self) -> Vec<(String, f64, f64, f64, f64)> {
        self.inner
            .records()
            .into_iter()
            .map(|r| (r.name, r.a, r.b, r.c, r.d))
            .collect()
    }

    /// Load (name, a, b, c, d) tuples in order. Stops at the first refused record;
    /// earlier records stay loaded. Returns the number loaded.
    pub fn load_records(&mut self, records: Vec<(String, f64, f64, f64, f64)>) -> PyResult<usize> {
        let records = records
            .into_iter()
            .map(|(name, a, b, c, d)| FuzzySetRecord { name, a, b, c, d });
        self.inner.load_records(records).map_err(registry_err)
    }

    /// Number of sets.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("MembershipRegistry(len={})", self.inner.len())
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Fuzzy partition registry Python bindings.
#[pymodule]
pub fn fuzzset_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFuzzySet>()?;
    m.add_class::<PyMembershipRegistry>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
