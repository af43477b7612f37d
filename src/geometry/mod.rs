//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y` grows
//! downwards. All coordinates are integer pixels.

use {
  euclid::Point2D,
  num_traits::ToPrimitive,
  crate::error::{Error, Result}
};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSpace;

pub type Point = Point2D<i64, PixelSpace>;

/// Euclidean norm of the position vector `p`.
/// Components are widened to `f64` before squaring, so no input overflows.
pub fn modulus<T, U>(p: Point2D<T, U>) -> f64
  where T: Copy + ToPrimitive {
  let [x, y] = [p.x, p.y].map(widen);
  (x * x + y * y).sqrt()
}

/// Defined for the whole domain of `T`, the difference is taken after widening.
pub fn distance<T, U>(a: Point2D<T, U>, b: Point2D<T, U>) -> f64
  where T: Copy + ToPrimitive {
  let [ax, ay, bx, by] = [a.x, a.y, b.x, b.y].map(widen);
  modulus(Point2D::<f64, U>::new(ax - bx, ay - by))
}

fn widen<T: ToPrimitive>(v: T) -> f64 {
  v.to_f64().unwrap_or(f64::NAN)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
  center: Point,
  radius: i64,
}

impl Circle {
  pub fn new(center: Point, radius: i64) -> Result<Self> {
    if radius < 0 {
      return Err(Error::NegativeRadius(radius));
    }
    Ok(Self { center, radius })
  }

  pub fn center(&self) -> Point {
    self.center
  }

  pub fn radius(&self) -> i64 {
    self.radius
  }

  /// Points lying exactly on the edge are contained.
  ///
  /// Same predicate as `distance(center, p) <= radius`, evaluated on squared lengths in
  /// `u128`, so it is exact for every pair of `i64` points.
  pub fn contains(&self, p: Point) -> bool {
    let square = |a: i64, b: i64| (i128::from(a) - i128::from(b)).unsigned_abs().pow(2);
    let radius = u128::from(self.radius.unsigned_abs());
    square(p.x, self.center.x)
      .checked_add(square(p.y, self.center.y))
      .map_or(false, |d2| d2 <= radius * radius)
  }
}
