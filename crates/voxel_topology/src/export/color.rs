//! RGBA colours and linear gradient colour maps.

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Color {
  pub const WHITE: Self = Self::rgb(255, 255, 255);
  pub const BLACK: Self = Self::rgb(0, 0, 0);
  pub const RED: Self = Self::rgb(255, 0, 0);
  pub const YELLOW: Self = Self::rgb(255, 255, 0);
  pub const GREEN: Self = Self::rgb(0, 255, 0);
  pub const CYAN: Self = Self::rgb(0, 255, 255);
  pub const BLUE: Self = Self::rgb(0, 0, 255);
  pub const MAGENTA: Self = Self::rgb(255, 0, 255);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Channels scaled to `[0, 1]`.
  pub fn to_unit(&self) -> [f32; 4] {
    [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
  }

  /// Channel-wise interpolation, `t` in `[0, 1]`.
  pub fn lerp(&self, other: &Self, t: f64) -> Self {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Self {
      r: mix(self.r, other.r),
      g: mix(self.g, other.g),
      b: mix(self.b, other.b),
      a: mix(self.a, other.a),
    }
  }
}

/// Maps a scalar range onto a piecewise linear sequence of colour stops.
///
/// `min` maps to the first stop, `max` to the last, stops are evenly spaced
/// in between. Values outside the range are clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientColorMap {
  min: f64,
  max: f64,
  stops: Vec<Color>,
}

impl GradientColorMap {
  pub fn new(min: f64, max: f64) -> Self {
    Self {
      min,
      max,
      stops: Vec::new(),
    }
  }

  /// Append a colour stop.
  pub fn add_color(&mut self, color: Color) -> &mut Self {
    self.stops.push(color);
    self
  }

  /// Builder form of [`Self::add_color`].
  pub fn with_color(mut self, color: Color) -> Self {
    self.stops.push(color);
    self
  }

  /// Colour for `value`. White without stops.
  pub fn color(&self, value: f64) -> Color {
    match self.stops.len() {
      0 => Color::WHITE,
      1 => self.stops[0],
      n => {
        let span = self.max - self.min;
        let t = if span > 0.0 {
          ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
          0.0
        };
        let scaled = t * (n - 1) as f64;
        let segment = (scaled.floor() as usize).min(n - 2);
        self.stops[segment].lerp(&self.stops[segment + 1], scaled - segment as f64)
      }
    }
  }
}
