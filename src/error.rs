//! .
//!
//! Construction of a [`Canvas`](crate::canvas::Canvas) is the only fallible operation of the
//! core; the rest of the variants wrap failures of the file and encoding layer unchanged.

use crate::geometry::PixelSpace;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("image side must be greater than 0, got {0}")]
  InvalidDimension(i64),
  #[error("circle radius must not be negative, got {0}")]
  NegativeRadius(i64),
  #[error("unknown preset `{0}`, expected one of: rgb, disc, blank")]
  UnknownPreset(String),
  #[error("bounds {0:?} do not fit into an image buffer")]
  Bounds(euclid::Box2D<i64, PixelSpace>),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
