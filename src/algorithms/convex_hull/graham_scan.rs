use log::{debug, trace};
use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::{Orientation, Precision};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    All results are valid convex polygons (exact for integer-valued inputs).
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Vertices are listed counterclockwise,
/// starting at the lowest point (leftmost among ties).
///
/// Returns `None` when fewer than three points remain after dropping points
/// that share a direction with the pivot. This covers empty input, repeated
/// points and colinear input.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let colinear = vec![Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.)];
/// assert_eq!(convex_hull(colinear), None);
/// ```
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let square = vec![
///   Point::new(0., 0.),
///   Point::new(0., 1.),
///   Point::new(1., 1.),
///   Point::new(1., 0.),
/// ];
/// let hull = convex_hull(square).unwrap();
/// assert_eq!(
///   hull.as_slice(),
///   &[Point::new(0., 0.), Point::new(1., 0.), Point::new(1., 1.), Point::new(0., 1.)]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(pts: Vec<Point>) -> Option<Hull> {
  convex_hull_with(pts, Precision::Exact)
}

/// Same as [`convex_hull`] but with an explicit zero test for the
/// orientation predicate. See [`Precision`].
pub fn convex_hull_with(mut pts: Vec<Point>, precision: Precision) -> Option<Hull> {
  let pivot = select_pivot(&mut pts)?;
  trace!("pivot {:?} selected from {} points", pivot, pts.len());

  sort_around(&mut pts);
  let n = pts.len();
  let pts = collapse_colinear(pts, precision);
  debug!("colinear collapse kept {} of {} points", pts.len(), n);
  if pts.len() < 3 {
    debug!("no hull: only {} points with distinct directions", pts.len());
    return None;
  }
  Some(Hull::new_unchecked(scan(pts, precision)))
}

/// $O(n)$ Move the lowest point (leftmost among ties) to the front and return it.
///
/// The first of several identical candidates wins. Returns `None` for an empty slice.
pub fn select_pivot(pts: &mut [Point]) -> Option<Point> {
  let mut best = 0;
  for (i, pt) in pts.iter().enumerate().skip(1) {
    let current = &pts[best];
    if pt.y_coord() < current.y_coord()
      || (pt.y_coord() == current.y_coord() && pt.x_coord() < current.x_coord())
    {
      best = i;
    }
  }
  let pivot = *pts.get(best)?;
  pts.swap(0, best);
  Some(pivot)
}

// Strictly increasing in the angle of `pt - pivot` over [0, pi), which covers
// every point that is not below the pivot. The pivot itself maps to -1.
fn direction_key(pivot: &Point, pt: &Point) -> f64 {
  let dx = pt.x_coord() - pivot.x_coord();
  let dy = pt.y_coord() - pivot.y_coord();
  let norm = dx.abs() + dy;
  if norm == 0.0 {
    -1.0
  } else {
    -dx / norm
  }
}

/// Order `a` and `b` by their direction as seen from `pivot`.
///
/// Points in the same direction are ordered by distance, closest first.
/// Otherwise the point reached first when sweeping counterclockwise is less.
///
/// Directions are compared through a monotone key rather than the sign of an
/// orientation determinant, so this is a total order for any input. When the
/// determinant is exact (integer-valued coordinates, for instance) the two
/// agree.
pub fn cmp_around(pivot: &Point, a: &Point, b: &Point) -> Ordering {
  direction_key(pivot, a)
    .total_cmp(&direction_key(pivot, b))
    .then_with(|| pivot.cmp_distance_to(a, b))
}

/// $O(n \log n)$ Sort `pts[1..]` around the pivot at `pts[0]`.
///
/// The sort is stable, so points that compare equal keep their input order.
/// The ordering does not depend on [`Precision`]; only the colinear collapse
/// and the scan apply the zero test.
pub fn sort_around(pts: &mut [Point]) {
  if let Some((pivot, rest)) = pts.split_first_mut() {
    rest.sort_by(|a, b| cmp_around(pivot, a, b));
  }
}

/// $O(n)$ Keep only the farthest point of every run that shares a direction
/// with the pivot.
///
/// Expects the output of [`sort_around`]. Works in place.
pub fn collapse_colinear(mut pts: Vec<Point>, precision: Precision) -> Vec<Point> {
  let n = pts.len();
  if n == 0 {
    return pts;
  }
  let pivot = pts[0];
  let mut write_idx = 1;
  let mut read_idx = 1;
  while read_idx < n {
    while read_idx + 1 < n
      && Orientation::with_precision(&pivot, &pts[read_idx], &pts[read_idx + 1], precision)
        .is_colinear()
    {
      read_idx += 1;
    }
    pts[write_idx] = pts[read_idx];
    write_idx += 1;
    read_idx += 1;
  }
  pts.truncate(write_idx);
  pts
}

/// $O(n)$ Graham's stack sweep over points sorted around `pts[0]`.
///
/// Expects the output of [`collapse_colinear`] with at least three points.
/// Shorter inputs are returned unchanged.
pub fn scan(pts: Vec<Point>, precision: Precision) -> Vec<Point> {
  if pts.len() < 3 {
    return pts;
  }
  let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
  stack.extend_from_slice(&pts[..3]);
  for pt in &pts[3..] {
    while stack.len() > 1 {
      let top = stack.len() - 1;
      if Orientation::with_precision(&stack[top - 1], &stack[top], pt, precision).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(*pt);
  }
  stack
}
