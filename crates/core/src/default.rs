//! Process-wide default vector.
//!
//! Every zero-argument construction ([`Vector3::from_default`]) and every
//! [`Vector3::reset_to_default`] call copies the *current* value stored here.
//! The value starts at (0, 0, 0), lives for the whole process, and only an
//! explicit [`set_default`] overwrites it. Copies are taken by value, so a
//! later `set_default` never reaches back into vectors that were constructed
//! earlier.
//!
//! Access is serialized behind a mutex so a `set_default` on one thread
//! cannot race a default-construction on another.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::vector::Vector3;

static DEFAULT: Mutex<Vector3> = Mutex::new(Vector3::ZERO);

/// Current value of the process-wide default vector.
#[inline]
pub fn default_vector() -> Vector3 {
    *lock()
}

/// Overwrite the process-wide default with `v`'s components.
///
/// Only vectors constructed or reset after this call observe the new value.
pub fn set_default(v: Vector3) {
    tracing::debug!(x = v.x, y = v.y, z = v.z, "default vector updated");
    *lock() = v;
}

fn lock() -> MutexGuard<'static, Vector3> {
    // The stored value is a plain Copy record, so a poisoned lock still
    // holds a usable vector.
    DEFAULT.lock().unwrap_or_else(PoisonError::into_inner)
}
