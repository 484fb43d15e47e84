//! 3D Vector Arithmetic Library
//!
//! A small fixed-size vector type with componentwise arithmetic, dot product,
//! normalization, 3x3 matrix transforms, magnitude comparison, and formatted
//! display output.
//!
//! Vectors constructed without explicit components copy a process-wide
//! default value that callers can change at runtime; see the [`default`]
//! module for the lifecycle rules.

pub mod default;
pub mod vector;

// Re-export core types
pub use default::{default_vector, set_default};
pub use vector::Vector3;
