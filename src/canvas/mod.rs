//! Square pixel source painted by circles.
//!
//! A [`Canvas`] holds an ordered list of [`Layer`]s. The color of a pixel starts as opaque
//! black, then every layer whose circle contains the pixel applies its [`Paint`], in order.
//! The three [`Preset`]s are the configurations this crate ships with.

use {
  std::{fmt, str::FromStr},
  euclid::{Box2D, Point2D},
  image::Rgba,
  crate::{
    error::{Error, Result},
    geometry::{Circle, PixelSpace, Point},
    raster::PixelSource
  }
};


pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, u8::MAX]);
pub const WHITE: Rgba<u8> = Rgba([u8::MAX; 4]);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
  Red,
  Green,
  Blue,
}

impl Channel {
  fn index(self) -> usize {
    match self {
      Channel::Red => 0,
      Channel::Green => 1,
      Channel::Blue => 2,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Paint {
  /// Raise a single channel to its maximum. Overlapping circles mix additively.
  Channel(Channel),
  /// Replace the color channels. Alpha stays opaque.
  Fill(Rgba<u8>),
}

impl Paint {
  fn apply(self, color: &mut Rgba<u8>) {
    match self {
      Paint::Channel(channel) => color.0[channel.index()] = u8::MAX,
      Paint::Fill(fill) => color.0[..3].copy_from_slice(&fill.0[..3]),
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
  pub circle: Circle,
  pub paint: Paint,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Preset {
  /// Red circle at the top, green at the bottom left, blue at the bottom right.
  #[default]
  Rgb,
  /// A single white disc inscribed in the canvas.
  Disc,
  /// Nothing at all, every pixel is black.
  Blank,
}

impl Preset {
  /// Positions are computed with integer division, as pixel coordinates.
  pub fn layers(self, side: i64) -> Result<Vec<Layer>> {
    let layer = |x, y, radius, paint| -> Result<Layer> {
      Ok(Layer { circle: Circle::new(Point::new(x, y), radius)?, paint })
    };
    match self {
      Preset::Rgb => {
        let r = side / 3;
        // floor(side * 2 / 3) without the overflowing product
        let two_thirds = side / 3 * 2 + side % 3 * 2 / 3;
        Ok(vec![
          layer(side / 2, side / 3, r, Paint::Channel(Channel::Red))?,
          layer(side / 3, two_thirds, r, Paint::Channel(Channel::Green))?,
          layer(two_thirds, two_thirds, r, Paint::Channel(Channel::Blue))?,
        ])
      }
      Preset::Disc => Ok(vec![
        layer(side / 2, side / 2, side / 2, Paint::Fill(WHITE))?
      ]),
      Preset::Blank => Ok(vec![]),
    }
  }
}

impl fmt::Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Preset::Rgb => "rgb",
      Preset::Disc => "disc",
      Preset::Blank => "blank",
    })
  }
}

impl FromStr for Preset {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "rgb" => Ok(Preset::Rgb),
      "disc" => Ok(Preset::Disc),
      "blank" => Ok(Preset::Blank),
      _ => Err(Error::UnknownPreset(s.to_string())),
    }
  }
}

/// Immutable once built, so it can be shared between rasterizing threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
  side: i64,
  layers: Vec<Layer>,
}

impl Canvas {
  /// Canvas with the [`Preset::Rgb`] layers.
  pub fn new(side: i64) -> Result<Self> {
    Self::with_preset(side, Preset::Rgb)
  }

  pub fn with_preset(side: i64, preset: Preset) -> Result<Self> {
    check_side(side)?;
    Self::with_layers(side, preset.layers(side)?)
  }

  pub fn with_layers(side: i64, layers: impl IntoIterator<Item = Layer>) -> Result<Self> {
    check_side(side)?;
    Ok(Self { side, layers: layers.into_iter().collect() })
  }

  pub fn side(&self) -> i64 {
    self.side
  }

  pub fn layers(&self) -> &[Layer] {
    &self.layers
  }
}

fn check_side(side: i64) -> Result<()> {
  if side < 1 {
    return Err(Error::InvalidDimension(side));
  }
  Ok(())
}

impl PixelSource for Canvas {
  type Pixel = Rgba<u8>;

  fn bounds(&self) -> Box2D<i64, PixelSpace> {
    Box2D::new(Point2D::zero(), Point2D::splat(self.side))
  }

  /// Defined for every coordinate, including the ones outside of [`bounds`](Self::bounds).
  fn at(&self, x: i64, y: i64) -> Rgba<u8> {
    let p = Point::new(x, y);
    self.layers.iter()
      .filter(|layer| layer.circle.contains(p))
      .fold(BLACK, |mut color, layer| {
        layer.paint.apply(&mut color);
        color
      })
  }
}
