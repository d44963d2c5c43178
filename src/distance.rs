use crate::data::Point;

/// Squared Euclidean distance between two points.
///
/// Monotonic in the true distance, so it is the one to use for comparisons.
pub fn squared_distance(p1: &Point, p2: &Point) -> f64 {
  let dx = p1.x_coord() - p2.x_coord();
  let dy = p1.y_coord() - p2.y_coord();
  dx * dx + dy * dy
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::data::Point;
/// # use graham_hull::euclidean_distance;
/// assert_eq!(euclidean_distance(&Point::new(0., 0.), &Point::new(3., 4.)), 5.0);
/// ```
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
  squared_distance(p1, p2).sqrt()
}
