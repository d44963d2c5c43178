use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Error, Orientation};

/// Vertices of a convex hull in counterclockwise order.
///
/// The first vertex is the pivot: the lowest input point, leftmost among ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull(Vec<Point>);

impl Hull {
  /// $O(1)$ Assume that the points already form a convex hull.
  ///
  /// The points must be strictly convex and listed counterclockwise. Use
  /// [`Hull::validate`] to check.
  pub fn new_unchecked(points: Vec<Point>) -> Hull {
    Hull(points)
  }

  /// $O(1)$ The first vertex, or `None` for an empty hull.
  pub fn pivot(&self) -> Option<&Point> {
    self.0.first()
  }

  /// $O(1)$
  pub fn as_slice(&self) -> &[Point] {
    &self.0
  }

  /// $O(1)$
  pub fn into_points(self) -> Vec<Point> {
    self.0
  }

  /// $O(n)$ Iterate over the edges as `(start, end)` pairs, closing the loop.
  pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
    self.0.iter().zip(self.0.iter().cycle().skip(1))
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let mut on_boundary = false;
    for (start, end) in self.edges() {
      match start.orientation(end, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// $O(n)$ Check that every vertex is a strict counterclockwise turn.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      let p = &self.0[i];
      let q = &self.0[(i + 1) % n];
      let r = &self.0[(i + 2) % n];
      if !p.orientation(q, r).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }
}

impl Deref for Hull {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.0
  }
}

impl From<Hull> for Vec<Point> {
  fn from(hull: Hull) -> Vec<Point> {
    hull.0
  }
}

impl IntoIterator for Hull {
  type Item = Point;
  type IntoIter = std::vec::IntoIter<Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Hull {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn unit_square() -> Hull {
    Hull::new_unchecked(vec![
      Point::new(0., 0.),
      Point::new(1., 0.),
      Point::new(1., 1.),
      Point::new(0., 1.),
    ])
  }

  #[test]
  fn square_is_valid() {
    assert_ok!(unit_square().validate());
  }

  #[test]
  fn clockwise_is_invalid() {
    let mut points = unit_square().into_points();
    points[1..].reverse();
    assert_err_eq!(
      Hull::new_unchecked(points).validate(),
      Error::ConvexViolation
    );
  }

  #[test]
  fn colinear_vertex_is_invalid() {
    let hull = Hull::new_unchecked(vec![
      Point::new(0., 0.),
      Point::new(1., 0.),
      Point::new(2., 0.),
      Point::new(0., 2.),
    ]);
    assert_err_eq!(hull.validate(), Error::ConvexViolation);
  }

  #[test]
  fn empty_hull_has_no_pivot() {
    let hull = Hull::new_unchecked(vec![]);
    assert_eq!(hull.pivot(), None);
    assert_err_eq!(hull.validate(), Error::InsufficientVertices);
  }

  #[test]
  fn too_small() {
    let hull = Hull::new_unchecked(vec![Point::new(0., 0.), Point::new(1., 0.)]);
    assert_err_eq!(hull.validate(), Error::InsufficientVertices);
  }

  #[test]
  fn edges_close_the_loop() {
    let square = unit_square();
    let edges: Vec<_> = square.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (&Point::new(0., 1.), &Point::new(0., 0.)));
  }

  #[test]
  fn locate() {
    let square = unit_square();
    assert_eq!(square.locate(&Point::new(0.5, 0.5)), PointLocation::Inside);
    assert_eq!(square.locate(&Point::new(0.5, 0.0)), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new(1.0, 1.0)), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new(2.0, 0.0)), PointLocation::Outside);
    assert_eq!(square.locate(&Point::new(0.5, -0.1)), PointLocation::Outside);
  }

  #[test]
  fn deref_to_slice() {
    let square = unit_square();
    assert_eq!(square.len(), 4);
    assert_eq!(square.pivot(), Some(&Point::new(0., 0.)));
    assert_eq!(square[2], Point::new(1., 1.));
  }
}
