//! Renders a square image of colored circles.
//!
//! The crate is split into three modules: [`geometry`] holds integer points and circles,
//! [`canvas`] decides the color of every pixel, and [`raster`] evaluates a pixel source into
//! an image buffer and writes it as PNG.
//!
//! # Basic usage
//! ```no_run
//! # use rgb_demo::{canvas::Canvas, raster, error::Result};
//! # fn main() -> Result<()> {
//! // red circle on top, green at the bottom left, blue at the bottom right
//! let canvas = Canvas::new(400)?;
//! let image = raster::rasterize_parallel(&canvas)?;
//! raster::write_png("rgb.png", &image)?; // fails if rgb.png already exists
//! #   Ok(())
//! # }
//! ```
//! Where the circles overlap, their channels add up: red and green give yellow, and the
//! middle of the picture, covered by all three, is white.
//!
//! Every pixel is computed independently of the others:
//! ```
//! # use rgb_demo::{canvas::Canvas, raster::PixelSource};
//! # use image::Rgba;
//! let canvas = Canvas::new(400).unwrap();
//! assert_eq!(canvas.at(200, 133), Rgba([255, 0, 0, 255]));
//! assert_eq!(canvas.at(0, 0), Rgba([0, 0, 0, 255]));
//! ```

pub mod error;
pub mod geometry;
pub mod canvas;
pub mod raster;

#[doc(hidden)]
pub use tracing;

/// Time an expression and log the elapsed milliseconds at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::tracing::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
