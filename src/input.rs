//! Loosely-typed point input.
//!
//! Points often arrive as coordinate pairs, as key/value records or as plain
//! lists of numbers. [`PointInput`] captures those shapes and [`normalize`]
//! resolves them into [`Point`]s once, before any geometry runs.
use log::debug;

use crate::algorithms::convex_hull;
use crate::data::{Hull, Point};
use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
  Point(Point),
  Pair(f64, f64),
  /// Named coordinates. Exactly the keys `"x"` and `"y"` are accepted.
  Keyed(Vec<(String, f64)>),
  /// Positional coordinates. Exactly two values are accepted.
  Positional(Vec<f64>),
}

impl From<Point> for PointInput {
  fn from(pt: Point) -> PointInput {
    PointInput::Point(pt)
  }
}

impl From<(f64, f64)> for PointInput {
  fn from((x, y): (f64, f64)) -> PointInput {
    PointInput::Pair(x, y)
  }
}

impl From<[f64; 2]> for PointInput {
  fn from([x, y]: [f64; 2]) -> PointInput {
    PointInput::Pair(x, y)
  }
}

impl From<Vec<f64>> for PointInput {
  fn from(coords: Vec<f64>) -> PointInput {
    PointInput::Positional(coords)
  }
}

impl From<Vec<(String, f64)>> for PointInput {
  fn from(fields: Vec<(String, f64)>) -> PointInput {
    PointInput::Keyed(fields)
  }
}

impl<'a> From<&'a [(&'a str, f64)]> for PointInput {
  fn from(fields: &'a [(&'a str, f64)]) -> PointInput {
    PointInput::Keyed(fields.iter().map(|(k, v)| (k.to_string(), *v)).collect())
  }
}

impl TryFrom<PointInput> for Point {
  type Error = Error;

  fn try_from(input: PointInput) -> Result<Point, Error> {
    let pt = match input {
      PointInput::Point(pt) => pt,
      PointInput::Pair(x, y) => Point::new(x, y),
      PointInput::Keyed(fields) => keyed_point(&fields)?,
      PointInput::Positional(coords) => match coords.as_slice() {
        &[x, y] => Point::new(x, y),
        _ => return Err(Error::InvalidArity(coords.len())),
      },
    };
    if !(pt.x_coord().is_finite() && pt.y_coord().is_finite()) {
      return Err(Error::NonFiniteCoordinate);
    }
    Ok(pt)
  }
}

fn keyed_point(fields: &[(String, f64)]) -> Result<Point, Error> {
  let mut x = None;
  let mut y = None;
  for (key, value) in fields {
    let (slot, axis) = match key.as_str() {
      "x" => (&mut x, 'x'),
      "y" => (&mut y, 'y'),
      _ => return Err(Error::UnexpectedKey(key.clone())),
    };
    if slot.replace(*value).is_some() {
      return Err(Error::DuplicateCoordinate(axis));
    }
  }
  match (x, y) {
    (Some(x), Some(y)) => Ok(Point::new(x, y)),
    (None, _) => Err(Error::MissingCoordinate('x')),
    (_, None) => Err(Error::MissingCoordinate('y')),
  }
}

/// $O(n)$ Convert every input into a [`Point`].
///
/// # Errors
/// Fails on the first malformed input, and with [`Error::EmptyInput`] if
/// there are no inputs at all.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::data::Point;
/// # use graham_hull::input::{normalize, PointInput};
/// # use graham_hull::Error;
/// let pts = normalize(vec![
///   PointInput::Pair(0., 0.),
///   PointInput::Positional(vec![1., 0.]),
///   PointInput::Keyed(vec![("y".to_string(), 1.), ("x".to_string(), 0.)]),
/// ]);
/// assert_eq!(
///   pts,
///   Ok(vec![Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)])
/// );
/// assert_eq!(normalize(Vec::<PointInput>::new()), Err(Error::EmptyInput));
/// ```
pub fn normalize<I>(inputs: I) -> Result<Vec<Point>, Error>
where
  I: IntoIterator,
  I::Item: Into<PointInput>,
{
  let pts = inputs
    .into_iter()
    .enumerate()
    .map(|(i, input)| {
      let input: PointInput = input.into();
      Point::try_from(input).map_err(|err| {
        debug!("rejected point input #{}: {}", i, err);
        err
      })
    })
    .collect::<Result<Vec<Point>, Error>>()?;
  if pts.is_empty() {
    return Err(Error::EmptyInput);
  }
  Ok(pts)
}

/// $O(n \log n)$ [`normalize`] the inputs, then compute their [`convex_hull`].
///
/// ```rust
/// # use graham_hull::convex_hull_of;
/// let hull = convex_hull_of(vec![(0., 0.), (4., 0.), (0., 4.), (1., 1.)]).unwrap();
/// assert_eq!(hull.map(|h| h.len()), Some(3));
/// ```
pub fn convex_hull_of<I>(inputs: I) -> Result<Option<Hull>, Error>
where
  I: IntoIterator,
  I::Item: Into<PointInput>,
{
  Ok(convex_hull(normalize(inputs)?))
}
