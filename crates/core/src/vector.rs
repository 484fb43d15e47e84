//! Fixed-size 3D vector value type.
//!
//! Implements common traits (Add, Sub, Mul, Display) alongside named methods
//! for the dot product, normalization, matrix transforms, and magnitude
//! comparison. Serde support for serialization.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::default;

/// 3D vector with `f64` components.
///
/// Value semantics throughout: arithmetic returns new vectors, and only
/// [`normalize`](Vector3::normalize) and
/// [`reset_to_default`](Vector3::reset_to_default) mutate in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Zero vector, also the initial process-wide default.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Create a vector with explicit components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector by copying the current process-wide default.
    ///
    /// The copy is taken at call time; a later [`set_default`](Self::set_default)
    /// does not reach back into vectors constructed earlier.
    #[inline]
    #[must_use]
    pub fn from_default() -> Self {
        default::default_vector()
    }

    /// Overwrite the process-wide default with `v`'s components.
    #[inline]
    pub fn set_default(v: Vector3) {
        default::set_default(v);
    }

    /// Overwrite `self` in place with the current process-wide default.
    #[inline]
    pub fn reset_to_default(&mut self) {
        *self = default::default_vector();
    }

    /// Componentwise `self - other`.
    #[inline]
    pub fn subtract(&self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Componentwise product with a scalar.
    #[inline]
    pub fn scale(&self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Scalar dot product.
    #[inline]
    pub fn dot(&self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize in place to unit length.
    ///
    /// A zero-length vector divides by zero and ends up with non-finite
    /// (`NaN`) components per IEEE-754 arithmetic; no guard is applied and
    /// no error is raised.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
    }

    /// Multiply by a square matrix given as rows of `f64` values.
    ///
    /// With exactly 3 rows of 3 columns each this is the standard 3x3
    /// matrix-vector product, `result[i] = Σ matrix[i][j] * self[j]`. Any
    /// other shape (a 2x2 matrix included) returns a copy of `self`
    /// unchanged; the mismatch is logged but never raised as an error.
    #[must_use]
    pub fn transform(&self, matrix: &[Vec<f64>]) -> Vector3 {
        if matrix.len() == 3
            && matrix[0].len() == 3
            && matrix[1].len() == 3
            && matrix[2].len() == 3
        {
            Vector3::new(
                matrix[0][0] * self.x + matrix[0][1] * self.y + matrix[0][2] * self.z,
                matrix[1][0] * self.x + matrix[1][1] * self.y + matrix[1][2] * self.z,
                matrix[2][0] * self.x + matrix[2][1] * self.y + matrix[2][2] * self.z,
            )
        } else {
            tracing::warn!(
                rows = matrix.len(),
                "matrix is not 3x3, returning vector unchanged"
            );
            *self
        }
    }

    /// Magnitude ordering: compares Euclidean lengths only, ignoring
    /// direction. Two different vectors of equal length compare `Equal`.
    ///
    /// Uses `f64::total_cmp`, so non-finite lengths still order totally.
    #[inline]
    pub fn compare(&self, other: &Vector3) -> Ordering {
        self.length().total_cmp(&other.length())
    }
}

// Vector3::default() copies the current process-wide default, matching
// zero-argument construction.
impl Default for Vector3 {
    fn default() -> Self {
        Vector3::from_default()
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl fmt::Display for Vector3 {
    /// Each component fixed to 1 decimal place, minimum field width 3,
    /// space-separated: `1.0 2.0 3.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3.1} {:3.1} {:3.1}", self.x, self.y, self.z)
    }
}
