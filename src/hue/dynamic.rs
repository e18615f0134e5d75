use crate::color::Color;
use crate::mode::{DisplayMode, ModeSource};

/// A color with one value for light mode and one for dark mode.
///
/// Nothing about the current mode is stored here: every resolution asks for
/// it, so a host that flips its mode sees the other shade on the next read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynamicColor {
    light: Color,
    dark: Color,
}

impl DynamicColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    #[inline]
    pub fn light(&self) -> Color {
        self.light
    }

    #[inline]
    pub fn dark(&self) -> Color {
        self.dark
    }

    #[inline]
    pub fn resolve(&self, mode: DisplayMode) -> Color {
        match mode {
            DisplayMode::Light => self.light,
            DisplayMode::Dark => self.dark,
        }
    }

    /// Resolve against whatever mode `source` reports right now.
    #[inline]
    pub fn resolve_from<S: ModeSource + ?Sized>(&self, source: &S) -> Color {
        self.resolve(source.display_mode())
    }

    /// Attach a mode source, giving a color that can be read without
    /// passing the mode around.
    pub fn bind<S: ModeSource>(self, source: S) -> BoundColor<S> {
        BoundColor {
            color: self,
            source,
        }
    }
}

/// A [`DynamicColor`] paired with the source of its display mode.
#[derive(Clone, Debug)]
pub struct BoundColor<S> {
    color: DynamicColor,
    source: S,
}

impl<S: ModeSource> BoundColor<S> {
    /// The color for the source's current mode.
    pub fn get(&self) -> Color {
        self.color.resolve_from(&self.source)
    }

    pub fn dynamic(&self) -> DynamicColor {
        self.color
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::SharedMode;
    use pretty_assertions::assert_eq;

    const LIGHT: Color = Color::from_hex("#FCD34D");
    const DARK: Color = Color::from_hex("#B45309");

    #[test]
    fn resolve_picks_by_mode() {
        let c = DynamicColor::new(LIGHT, DARK);
        assert_eq!(c.resolve(DisplayMode::Light), LIGHT);
        assert_eq!(c.resolve(DisplayMode::Dark), DARK);
        assert_eq!(c.resolve_from(&DisplayMode::Dark), DARK);
        assert_eq!((c.light(), c.dark()), (LIGHT, DARK));
    }

    #[test]
    fn bound_color_follows_the_switch() {
        let mode = SharedMode::new(DisplayMode::Light);
        let bound = DynamicColor::new(LIGHT, DARK).bind(mode.clone());
        assert_eq!(bound.get(), LIGHT);
        mode.toggle();
        assert_eq!(bound.get(), DARK);
        mode.set(DisplayMode::Light);
        assert_eq!(bound.get(), LIGHT);
        assert_eq!(bound.source().get(), DisplayMode::Light);
    }

    #[test]
    fn bound_to_a_closure() {
        let bound = DynamicColor::new(LIGHT, DARK).bind(|| DisplayMode::Dark);
        assert_eq!(bound.get(), DARK);
        assert_eq!(bound.dynamic(), DynamicColor::new(LIGHT, DARK));
    }
}
