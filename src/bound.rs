//! Raw bound input: numbers or text as supplied by a form field or a file.
//!
//! Every bound passes through [`IntoBound`] before a [`FuzzySet`] is built, so
//! a malformed value is a [`ValidationError`] rather than a panic.
//!
//! [`FuzzySet`]: crate::set::FuzzySet

use alloc::string::{String, ToString};

use crate::error::{BoundField, ValidationError};

/// A numeric-like value that can become one of the four trapezoid bounds.
///
/// Implemented for the primitive numeric types and for text. Text is trimmed
/// before parsing; anything `f64::from_str` rejects is
/// [`ValidationError::Unparsable`]. Infinite and NaN results are
/// [`ValidationError::NonFinite`].
pub trait IntoBound {
    /// Convert into a finite `f64`, tagging any failure with `field`.
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError>;
}

fn finite(value: f64, field: BoundField) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

impl IntoBound for f64 {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        finite(self, field)
    }
}

impl IntoBound for f32 {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        finite(f64::from(self), field)
    }
}

impl IntoBound for i32 {
    fn into_bound(self, _field: BoundField) -> Result<f64, ValidationError> {
        Ok(f64::from(self))
    }
}

impl IntoBound for i64 {
    fn into_bound(self, _field: BoundField) -> Result<f64, ValidationError> {
        Ok(self as f64)
    }
}

impl IntoBound for &str {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        let value = self
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::Unparsable {
                field,
                input: self.to_string(),
            })?;
        finite(value, field)
    }
}

impl IntoBound for &String {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        self.as_str().into_bound(field)
    }
}

impl IntoBound for String {
    fn into_bound(self, field: BoundField) -> Result<f64, ValidationError> {
        self.as_str().into_bound(field)
    }
}
