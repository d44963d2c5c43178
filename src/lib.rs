//! Planar convex hulls by Graham scan.
//!
//! ```rust
//! # use graham_hull::algorithms::convex_hull;
//! # use graham_hull::data::Point;
//! let pts = vec![
//!   Point::new(0., 0.),
//!   Point::new(4., 0.),
//!   Point::new(0., 4.),
//!   Point::new(1., 1.),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(
//!   hull.as_slice(),
//!   &[Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)]
//! );
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod distance;
pub mod input;
mod orientation;

pub use distance::{euclidean_distance, squared_distance};
pub use input::{convex_hull_of, PointInput};
pub use orientation::{Orientation, Precision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  EmptyInput,
  InsufficientVertices,
  /// Three consecutive hull vertices are either colinear or oriented clockwise.
  ConvexViolation,
  NonFiniteCoordinate,
  MissingCoordinate(char),
  DuplicateCoordinate(char),
  UnexpectedKey(String),
  InvalidArity(usize),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptyInput => write!(f, "Empty input"),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::NonFiniteCoordinate => write!(f, "Coordinates must be finite"),
      Error::MissingCoordinate(axis) => write!(f, "Missing '{}' coordinate", axis),
      Error::DuplicateCoordinate(axis) => write!(f, "Duplicate '{}' coordinate", axis),
      Error::UnexpectedKey(key) => write!(f, "Unexpected key '{}'", key),
      Error::InvalidArity(n) => write!(f, "Expected 2 coordinates, found {}", n),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
