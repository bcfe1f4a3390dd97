//! # fuzzset-core
//!
//! A validated registry of trapezoidal and triangular fuzzy membership functions
//! that together form a fuzzy partition of a numeric domain.
//!
//! ---
//!
//! ## What the registry guarantees
//!
//! **Well-formed shapes**: every set satisfies `a < b <= c < d`. Membership ramps
//! up over `(a, b)`, is 1 over `[b, c]`, and ramps down over `(c, d)`. A set with
//! `b == c` is triangular.
//!
//! **Clean adjacency**: a new set may not start inside an existing set's rising
//! span, end inside its falling span, or swallow it whole.
//!
//! **Partition of unity**: at each of a new set's four defining points, the
//! membership degrees across the whole collection sum to exactly 1 (or to 0 where
//! nothing covers the point).
//!
//! **Atomic add**: a refused set changes nothing.
//!
//! ## The pipeline
//!
//! ```text
//! text / numbers → IntoBound → FuzzySet::parse → MembershipRegistry::validate → commit
//!                                                        │
//!                                   supports_illegally_overlap, sum_is_unity
//!
//! x → MembershipRegistry::query_point → PointQuery { degrees, point, sum }
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`set`] | [`FuzzySet`], [`ShapeKind`] | One membership function; degree and plot polyline |
//! | [`bound`] | [`IntoBound`] | Numbers or form text into finite bounds |
//! | [`predicate`] | [`supports_illegally_overlap`], [`sum_is_unity`] | Named validation rules |
//! | [`query`] | [`PointQuery`] | Pure point queries over any sequence of sets |
//! | [`registry`] | [`MembershipRegistry`], [`RegistryConfig`], [`DomainBounds`] | The registry |
//! | [`record`] | [`FuzzySetRecord`] | Persisted record shape (serde under the `serde` feature) |
//! | [`error`] | [`ValidationError`], [`RegistryError`] | Error taxonomy |
//! | `persist` | `to_json`, `load_from_path`, … | `.fuzz` JSON files (requires `json`) |
//! | `ffi` | `PyMembershipRegistry` | Python bindings (requires `python-ffi`) |
//!
//! ## `no_std`
//!
//! The core is `#![no_std]` + `alloc` by default. Enable `std` for `std::error::Error`
//! integration, `serde` for record serialisation, `json` for the file helpers, and
//! `python-ffi` for the PyO3 extension module.
//!
//! ## Logging
//!
//! Accepted and rejected adds, deletions, clears and bulk loads emit [`tracing`]
//! events. The library never installs a subscriber.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod bound;
pub mod error;
pub mod predicate;
pub mod query;
pub mod record;
pub mod registry;
pub mod set;

#[cfg(feature = "json")]
pub mod persist;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use bound::IntoBound;
pub use error::{BoundField, RegistryError, ValidationError};
pub use predicate::{sum_is_unity, supports_illegally_overlap};
pub use query::PointQuery;
pub use record::FuzzySetRecord;
pub use registry::{DomainBounds, MembershipRegistry, RegistryConfig};
pub use set::{FuzzySet, ShapeKind};

#[cfg(feature = "json")]
pub use error::PersistError;
