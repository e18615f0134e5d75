use std::fmt;

use crate::color::parse::{parse_hex6_strict, ColorParseError};
use crate::color::ColorFloat;
use crate::traits::float::Float;

// stores 8 bit sRGB under the hood; normalized channels are derived on read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color in the strict `#RRGGBB` form.
    ///
    /// This is the constructor used for palette literals. Because it is a
    /// `const fn`, a malformed literal in a `static` or `const` initializer
    /// is rejected at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `hex` is not exactly `#` followed by six hex digits. Use
    /// [`Color::try_from_hex`] for input that is not a trusted literal.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        match parse_hex6_strict(hex) {
            Ok(color) => color,
            Err(_) => panic!("malformed hex color literal, expected #RRGGBB"),
        }
    }

    /// Parse a color in the strict `#RRGGBB` form, reporting malformed input.
    pub const fn try_from_hex(hex: &str) -> Result<Self, ColorParseError> {
        parse_hex6_strict(hex)
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    #[must_use]
    #[inline]
    pub fn into_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build an opaque color from normalized channels.
    ///
    /// Channels outside 0.0..=1.0 are clamped and rounded to the nearest
    /// 8 bit step.
    #[must_use]
    #[inline]
    pub fn from_normalized<T: Float>(rgb: [T; 3]) -> Self {
        Self::rgb(
            rgb[0].to_channel_u8(),
            rgb[1].to_channel_u8(),
            rgb[2].to_channel_u8(),
        )
    }

    /// The red, green, blue and alpha channels as fractions of 255.
    #[must_use]
    #[inline]
    pub fn into_normalized<T: Float>(self) -> [T; 4] {
        [
            T::from_channel_u8(self.r),
            T::from_channel_u8(self.g),
            T::from_channel_u8(self.b),
            T::from_channel_u8(self.a),
        ]
    }

    #[must_use]
    #[inline]
    pub fn red(self) -> ColorFloat {
        ColorFloat::from_channel_u8(self.r)
    }

    #[must_use]
    #[inline]
    pub fn green(self) -> ColorFloat {
        ColorFloat::from_channel_u8(self.g)
    }

    #[must_use]
    #[inline]
    pub fn blue(self) -> ColorFloat {
        ColorFloat::from_channel_u8(self.b)
    }

    #[must_use]
    #[inline]
    pub fn alpha(self) -> ColorFloat {
        ColorFloat::from_channel_u8(self.a)
    }

    #[must_use]
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    #[inline]
    pub fn into_hex8(self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // default to RGBA hex for lossless stringification
        write!(f, "#{}", self.into_hex8())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::color::parse::parse_color(&s).map_err(serde::de::Error::custom)
    }
}
