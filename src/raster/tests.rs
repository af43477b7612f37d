use {
  super::*,
  crate::canvas::{Canvas, Preset, BLACK},
  anyhow::Result,
  euclid::Point2D,
  image::{Luma, Rgba}
};

/// Gradient over an arbitrary rectangle, for checking the buffer offset.
struct Gradient(Box2D<i64, PixelSpace>);

impl PixelSource for Gradient {
  type Pixel = Luma<u8>;

  fn bounds(&self) -> Box2D<i64, PixelSpace> {
    self.0
  }

  fn at(&self, x: i64, y: i64) -> Luma<u8> {
    Luma([(x * 16 + y).rem_euclid(256) as u8])
  }
}

#[test] fn rasterize_matches_at() -> Result<()> {
  let canvas = Canvas::new(60)?;
  let image = rasterize(&canvas)?;
  assert_eq!(image.dimensions(), (60, 60));
  image.enumerate_pixels()
    .for_each(|(x, y, pixel)| assert_eq!(*pixel, canvas.at(x as i64, y as i64)));
  Ok(())
}

#[test] fn parallel_matches_sequential() -> Result<()> {
  [Preset::Rgb, Preset::Disc, Preset::Blank]
    .into_iter()
    .try_for_each(|preset| -> Result<()> {
      let canvas = Canvas::with_preset(73, preset)?;
      assert_eq!(rasterize(&canvas)?, rasterize_parallel(&canvas)?);
      Ok(())
    })
}

#[test] fn offset_bounds() -> Result<()> {
  let source = Gradient(Box2D::new(Point2D::new(-3, 5), Point2D::new(4, 9)));
  let image = rasterize(&source)?;
  assert_eq!(image.dimensions(), (7, 4));
  assert_eq!(*image.get_pixel(0, 0), source.at(-3, 5));
  assert_eq!(*image.get_pixel(6, 3), source.at(3, 8));
  assert_eq!(image, rasterize_parallel(&source)?);
  Ok(())
}

#[test] fn empty_bounds() -> Result<()> {
  let source = Gradient(Box2D::new(Point2D::new(2, 2), Point2D::new(2, 10)));
  assert_eq!(rasterize(&source)?.dimensions(), (0, 8));
  assert_eq!(rasterize_parallel(&source)?.dimensions(), (0, 8));
  Ok(())
}

#[test] fn inverted_bounds() {
  let source = Gradient(Box2D::new(Point2D::new(5, 5), Point2D::new(0, 0)));
  assert!(matches!(rasterize(&source), Err(Error::Bounds(_))));
  assert!(matches!(rasterize_parallel(&source), Err(Error::Bounds(_))));
}

#[test] fn rgb_corners() -> Result<()> {
  let image = rasterize_parallel(&Canvas::new(400)?)?;
  assert_eq!(*image.get_pixel(0, 0), BLACK);
  assert_eq!(*image.get_pixel(399, 399), BLACK);
  assert_eq!(*image.get_pixel(200, 133), Rgba([255, 0, 0, 255]));
  Ok(())
}

#[test] fn write_png_roundtrip() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("rgb.png");
  let expected = rasterize(&Canvas::new(48)?)?;

  let written = write_png(&path, &expected)?;
  assert_eq!(written, std::fs::metadata(&path)?.len());
  assert_eq!(image::open(&path)?.to_rgba8(), expected);
  Ok(())
}

#[test] fn write_png_refuses_existing() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("taken.png");
  std::fs::write(&path, b"keep me")?;

  let image = rasterize(&Canvas::new(8)?)?;
  match write_png(&path, &image) {
    Err(Error::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists),
    other => panic!("expected AlreadyExists, got {:?}", other)
  }
  assert_eq!(std::fs::read(&path)?, b"keep me");
  Ok(())
}
