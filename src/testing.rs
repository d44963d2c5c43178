// Strategies for property tests.
//
// Generated points have integer coordinates that fit in an i16. Every
// orientation determinant and squared distance computed from them is an
// exact f64, so comparators built on them are total orders.
use crate::data::Point;

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

impl Arbitrary for Point {
  type Strategy = Mapped<(i16, i16), Point>;
  type Parameters = ();
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any::<(i16, i16)>().prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
  }
}

/// Points on a small grid, so that repeats and colinear runs are common.
pub fn any_grid_point() -> impl Strategy<Value = Point> {
  (-8i8..=8, -8i8..=8).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

/// Fractional points in `[0, 4)²`. Many triples have a doubled area below one
/// unit, which is where truncated orientation tests diverge from exact ones.
pub fn any_fractional_point() -> impl Strategy<Value = Point> {
  (0.0..4.0f64, 0.0..4.0f64).prop_map(|(x, y)| Point::new(x, y))
}
