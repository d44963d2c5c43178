use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// How the orientation determinant is compared against zero.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
pub enum Precision {
  /// Compare the floating-point determinant directly against zero.
  #[default]
  Exact,
  /// Truncate the determinant toward zero first. Any triple whose doubled
  /// signed area lies strictly between -1 and 1 is reported as colinear.
  Truncated,
}

impl Precision {
  fn is_zero(self, val: f64) -> bool {
    match self {
      Precision::Exact => val == 0.0,
      Precision::Truncated => val.trunc() == 0.0,
    }
  }
}

// (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
// Twice the signed area of pqr, negated: positive for clockwise turns.
fn turn_determinant(p: &Point, q: &Point, r: &Point) -> f64 {
  (q.y_coord() - p.y_coord()) * (r.x_coord() - q.x_coord())
    - (q.x_coord() - p.x_coord()) * (r.y_coord() - q.y_coord())
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// # use graham_hull::Orientation;
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(0., 1.); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1., 2.)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::with_precision(p1, p2, p3, Precision::Exact)
  }

  /// Same as [`Orientation::new`] but with an explicit zero test.
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// # use graham_hull::{Orientation, Precision};
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(1., 0.);
  /// let p3 = Point::new(2., 0.5);
  /// assert!(Orientation::with_precision(&p1, &p2, &p3, Precision::Exact).is_ccw());
  /// assert!(Orientation::with_precision(&p1, &p2, &p3, Precision::Truncated).is_colinear());
  /// ```
  pub fn with_precision(p1: &Point, p2: &Point, p3: &Point, precision: Precision) -> Orientation {
    let val = turn_determinant(p1, p2, p3);
    if precision.is_zero(val) {
      Orientation::CoLinear
    } else if val > 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CounterClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use Orientation::*;

  use test_strategy::proptest;

  #[test]
  fn test_turns() {
    let origin = Point::new(0., 0.);
    assert_eq!(
      Orientation::new(&origin, &Point::new(1., 1.), &Point::new(2., 2.)),
      CoLinear
    );
    assert_eq!(
      Orientation::new(&origin, &Point::new(0., 1.), &Point::new(2., 2.)),
      ClockWise
    );
    assert_eq!(
      Orientation::new(&origin, &Point::new(0., 1.), &Point::new(-2., 2.)),
      CounterClockWise
    );
    assert_eq!(Orientation::new(&origin, &origin, &origin), CoLinear);
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new(0., 0.).orientation(&Point::new(1., 0.), &Point::new(1., 0.)),
      CoLinear
    );
    assert_eq!(
      Point::new(1., 0.).orientation(&Point::new(2., 0.), &Point::new(0., 0.)),
      CoLinear
    );
  }

  #[test]
  fn unit_2() {
    assert_eq!(
      Point::new(1., 0.).orientation(&Point::new(0., 6.), &Point::new(0., 8.)),
      ClockWise
    );
  }

  #[test]
  fn truncation_only_affects_small_determinants() {
    let p = Point::new(0., 0.);
    let q = Point::new(1., 0.);
    // Doubled area 0.5: below one unit.
    let r = Point::new(2., 0.5);
    assert_eq!(Orientation::with_precision(&p, &q, &r, Precision::Exact), CounterClockWise);
    assert_eq!(Orientation::with_precision(&p, &q, &r, Precision::Truncated), CoLinear);
    // Doubled area 1.5: truncates to 1.
    let r = Point::new(2., -1.5);
    assert_eq!(Orientation::with_precision(&p, &q, &r, Precision::Exact), ClockWise);
    assert_eq!(Orientation::with_precision(&p, &q, &r, Precision::Truncated), ClockWise);
  }

  #[test]
  fn default_precision_is_exact() {
    assert_eq!(Precision::default(), Precision::Exact);
  }

  #[proptest]
  fn orientation_reverse(p1: Point, p2: Point, p3: Point) {
    let abc = Orientation::new(&p1, &p2, &p3);
    let cba = Orientation::new(&p3, &p2, &p1);
    assert_eq!(abc, cba.reverse())
  }

  #[proptest]
  fn precisions_agree_on_integers(p1: Point, p2: Point, p3: Point) {
    assert_eq!(
      Orientation::with_precision(&p1, &p2, &p3, Precision::Exact),
      Orientation::with_precision(&p1, &p2, &p3, Precision::Truncated)
    )
  }

  #[proptest]
  fn doubled_points_are_colinear(p1: Point, p2: Point) {
    assert!(Orientation::new(&p1, &p2, &p2).is_colinear());
    assert!(Orientation::new(&p1, &p1, &p2).is_colinear());
  }
}
