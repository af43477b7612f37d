//! Turning a [`PixelSource`] into an image buffer, and writing it out.

use {
  euclid::{Box2D, Size2D},
  image::{ImageBuffer, Pixel},
  crate::{
    error::{Error, Result},
    geometry::PixelSpace
  }
};

mod output;
#[cfg(test)] mod tests;
pub use output::write_png;

/// Something that can be asked for the color of any pixel.
pub trait PixelSource {
  /// Color model of the source.
  type Pixel: Pixel;
  /// Rectangle to rasterize, `max` is exclusive.
  fn bounds(&self) -> Box2D<i64, PixelSpace>;
  fn at(&self, x: i64, y: i64) -> Self::Pixel;
}

pub type Buffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

fn buffer_size(bounds: Box2D<i64, PixelSpace>) -> Result<Size2D<u32, PixelSpace>> {
  let size = bounds.size();
  match (u32::try_from(size.width), u32::try_from(size.height)) {
    (Ok(width), Ok(height)) => Ok(Size2D::new(width, height)),
    _ => Err(Error::Bounds(bounds))
  }
}

/// Evaluate the source row by row on the current thread.
/// Pixel `(0, 0)` of the buffer is `bounds().min` of the source.
pub fn rasterize<S: PixelSource>(source: &S) -> Result<Buffer<S::Pixel>> {
  let bounds = source.bounds();
  let size = buffer_size(bounds)?;
  let mut image = ImageBuffer::new(size.width, size.height);

  itertools::iproduct!(0..size.height, 0..size.width)
    .for_each(|(y, x)| image.put_pixel(x, y, source.at(
      bounds.min.x + i64::from(x),
      bounds.min.y + i64::from(y)
    )));
  Ok(image)
}

/// Same result as [`rasterize`], rows are distributed over the rayon thread pool.
pub fn rasterize_parallel<S>(source: &S) -> Result<Buffer<S::Pixel>>
  where S: PixelSource + Sync,
        <S::Pixel as Pixel>::Subpixel: Send {
  use rayon::prelude::*;

  let bounds = source.bounds();
  let size = buffer_size(bounds)?;
  let mut image: Buffer<S::Pixel> = ImageBuffer::new(size.width, size.height);
  let channels = <S::Pixel as Pixel>::CHANNEL_COUNT as usize;
  let stride = size.width as usize * channels;
  if stride == 0 {
    return Ok(image);
  }

  image.par_chunks_mut(stride)
    .enumerate()
    .for_each(|(row, subpixels)| {
      let y = bounds.min.y + row as i64;
      subpixels.chunks_mut(channels)
        .zip(bounds.x_range())
        .for_each(|(pixel, x)| pixel.copy_from_slice(source.at(x, y).channels()));
    });
  tracing::trace!(?size, "rasterized in parallel");
  Ok(image)
}
