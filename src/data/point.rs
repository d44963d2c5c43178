use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::distance::{euclidean_distance, squared_distance};
use crate::Orientation;

/// A point in the plane.
///
/// Equality, ordering and hashing are coordinate-wise. Ordering is
/// lexicographic, first by `x` and then by `y`.
#[derive(Debug, Clone, Copy)]
pub struct Point {
  x: f64,
  y: f64,
}

// Random sampling.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  pub fn x_coord(&self) -> f64 {
    self.x
  }

  pub fn y_coord(&self) -> f64 {
    self.y
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    squared_distance(self, rhs)
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    euclidean_distance(self, rhs)
  }

  /// Compare the distance from `self` to `p` against the distance from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (OrderedFloat(self.x), OrderedFloat(self.y))
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Point) -> bool {
    self.key() == other.key()
  }
}

impl Eq for Point {}

impl PartialOrd for Point {
  fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Point {
  fn cmp(&self, other: &Point) -> Ordering {
    self.key().cmp(&other.key())
  }
}

impl Hash for Point {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.key().hash(state)
  }
}

impl From<(f64, f64)> for Point {
  fn from((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
  }
}

impl From<[f64; 2]> for Point {
  fn from([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
  }
}

impl From<Point> for (f64, f64) {
  fn from(pt: Point) -> (f64, f64) {
    (pt.x, pt.y)
  }
}
