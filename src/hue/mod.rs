pub mod dynamic;
pub mod shade;

use std::ops::Index;

pub use dynamic::{BoundColor, DynamicColor};
pub use shade::{InvalidShade, Shade};

use crate::color::Color;

/// A hue contains ten shades of the same color, where `_50` is the lightest
/// and `_900` is the darkest.
///
/// Shades can be read through the fields (`hue._500`), by [`Shade`]
/// (`hue.get(Shade::S500)`, `hue[Shade::S500]`), or by the numeric level
/// (`hue.at(500)`, `hue[500]`). Numeric access panics on levels outside the
/// scale; [`Hue::try_at`] reports them instead.
///
/// For light/dark support build a [`DynamicColor`]:
///
/// ```
/// use tailwind_hues::{palette, DisplayMode};
///
/// let text = palette::AMBER.dynamic(700, 300);
/// assert_eq!(text.resolve(DisplayMode::Light), palette::AMBER._700);
/// assert_eq!(text.resolve(DisplayMode::Dark), palette::AMBER._300);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hue {
    pub _50: Color,
    pub _100: Color,
    pub _200: Color,
    pub _300: Color,
    pub _400: Color,
    pub _500: Color,
    pub _600: Color,
    pub _700: Color,
    pub _800: Color,
    pub _900: Color,
}

impl Hue {
    /// Build a hue from its shades, lightest first.
    pub const fn new(shades: [Color; 10]) -> Self {
        let [_50, _100, _200, _300, _400, _500, _600, _700, _800, _900] = shades;
        Self {
            _50,
            _100,
            _200,
            _300,
            _400,
            _500,
            _600,
            _700,
            _800,
            _900,
        }
    }

    /// Build a hue from `#RRGGBB` literals, lightest first.
    ///
    /// # Panics
    ///
    /// Panics if any literal is malformed; in a `static` initializer that is
    /// a compile error:
    ///
    /// ```compile_fail
    /// use tailwind_hues::Hue;
    ///
    /// static BAD: Hue = Hue::from_hex([
    ///     "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
    ///     "#92400E", "#78350G",
    /// ]);
    /// ```
    ///
    /// The same table with valid digits builds:
    ///
    /// ```
    /// use tailwind_hues::Hue;
    ///
    /// static GOOD: Hue = Hue::from_hex([
    ///     "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
    ///     "#92400E", "#78350F",
    /// ]);
    /// assert_eq!(GOOD._900, tailwind_hues::Color::rgb(0x78, 0x35, 0x0f));
    /// ```
    pub const fn from_hex(hex: [&str; 10]) -> Self {
        let mut shades = [Color::BLACK; 10];
        let mut i = 0;
        while i < hex.len() {
            shades[i] = Color::from_hex(hex[i]);
            i += 1;
        }
        Self::new(shades)
    }

    #[inline]
    fn shade_ref(&self, shade: Shade) -> &Color {
        match shade {
            Shade::S50 => &self._50,
            Shade::S100 => &self._100,
            Shade::S200 => &self._200,
            Shade::S300 => &self._300,
            Shade::S400 => &self._400,
            Shade::S500 => &self._500,
            Shade::S600 => &self._600,
            Shade::S700 => &self._700,
            Shade::S800 => &self._800,
            Shade::S900 => &self._900,
        }
    }

    #[inline]
    pub fn get(&self, shade: Shade) -> Color {
        *self.shade_ref(shade)
    }

    /// The color at a numeric shade level.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not one of 50, 100, 200, ..., 900.
    #[track_caller]
    pub fn at(&self, level: u16) -> Color {
        match self.try_at(level) {
            Ok(color) => color,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_at(&self, level: u16) -> Result<Color, InvalidShade> {
        Shade::from_level(level).map(|shade| self.get(shade))
    }

    /// All ten shades, lightest first.
    pub fn shades(&self) -> [Color; 10] {
        Shade::ALL.map(|shade| self.get(shade))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        Shade::ALL.into_iter().map(move |shade| (shade, self.get(shade)))
    }

    /// A color that resolves to the `light` level in light mode and the
    /// `dark` level in dark mode.
    ///
    /// # Panics
    ///
    /// Panics if either level is off the scale, like [`Hue::at`].
    #[track_caller]
    pub fn dynamic(&self, light: u16, dark: u16) -> DynamicColor {
        DynamicColor::new(self.at(light), self.at(dark))
    }

    pub fn try_dynamic(&self, light: u16, dark: u16) -> Result<DynamicColor, InvalidShade> {
        Ok(DynamicColor::new(self.try_at(light)?, self.try_at(dark)?))
    }

    /// Same as [`Hue::dynamic`], with the shades picked by selector, e.g.
    /// `hue.dynamic_by(|h| h._700, |h| h._300)`.
    pub fn dynamic_by<L, D>(&self, light: L, dark: D) -> DynamicColor
    where
        L: Fn(&Hue) -> Color,
        D: Fn(&Hue) -> Color,
    {
        DynamicColor::new(light(self), dark(self))
    }

    pub fn dynamic_shades(&self, light: Shade, dark: Shade) -> DynamicColor {
        DynamicColor::new(self.get(light), self.get(dark))
    }
}

impl Index<Shade> for Hue {
    type Output = Color;
    fn index(&self, shade: Shade) -> &Color {
        self.shade_ref(shade)
    }
}

impl Index<u16> for Hue {
    type Output = Color;
    #[track_caller]
    fn index(&self, level: u16) -> &Color {
        match Shade::from_level(level) {
            Ok(shade) => self.shade_ref(shade),
            Err(err) => panic!("{err}"),
        }
    }
}
