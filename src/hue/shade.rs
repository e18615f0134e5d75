use std::fmt;

/// The ten lightness steps of a hue, `S50` lightest and `S900` darkest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum Shade {
    S50 = 50,
    S100 = 100,
    S200 = 200,
    S300 = 300,
    S400 = 400,
    S500 = 500,
    S600 = 600,
    S700 = 700,
    S800 = 800,
    S900 = 900,
}

/// A shade level outside {50, 100, 200, ..., 900}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid shade {0} for hue, must be one of: [50,100,200,300,400,500,600,700,800,900]")]
pub struct InvalidShade(pub u16);

impl Shade {
    /// All shades, lightest first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    pub const fn from_level(level: u16) -> Result<Self, InvalidShade> {
        use Shade::*;
        Ok(match level {
            50 => S50,
            100 => S100,
            200 => S200,
            300 => S300,
            400 => S400,
            500 => S500,
            600 => S600,
            700 => S700,
            800 => S800,
            900 => S900,
            _ => return Err(InvalidShade(level)),
        })
    }

    #[inline]
    pub const fn level(self) -> u16 {
        self as u16
    }

    /// Position in [`Shade::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self.level() as usize / 100
    }

    /// One step lighter, or `None` at 50.
    pub fn lighter(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// One step darker, or `None` at 900.
    pub fn darker(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl TryFrom<u16> for Shade {
    type Error = InvalidShade;
    fn try_from(level: u16) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

impl From<Shade> for u16 {
    fn from(shade: Shade) -> Self {
        shade.level()
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Shade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.level())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Shade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let level = <u16 as serde::Deserialize>::deserialize(deserializer)?;
        Shade::from_level(level).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn levels_round_trip_through_from_level() {
        for shade in Shade::ALL {
            assert_eq!(Shade::from_level(shade.level()), Ok(shade));
        }
    }

    #[test]
    fn index_matches_position() {
        for (i, shade) in Shade::ALL.iter().enumerate() {
            assert_eq!(shade.index(), i);
        }
    }

    #[test]
    fn off_scale_levels_are_rejected() {
        for level in [0, 49, 51, 150, 950, 999, 1000, u16::MAX] {
            assert_eq!(Shade::try_from(level), Err(InvalidShade(level)));
        }
    }

    #[test]
    fn stepping_stops_at_the_ends() {
        assert_eq!(Shade::S50.lighter(), None);
        assert_eq!(Shade::S50.darker(), Some(Shade::S100));
        assert_eq!(Shade::S500.lighter(), Some(Shade::S400));
        assert_eq!(Shade::S900.darker(), None);
    }

    #[test]
    fn ordering_is_lightest_first() {
        assert!(Shade::S50 < Shade::S900);
        let mut sorted = Shade::ALL;
        sorted.sort();
        assert_eq!(sorted, Shade::ALL);
    }

    #[test]
    fn display_is_the_number() {
        assert_eq!(Shade::S700.to_string(), "700");
        assert_eq!(u16::from(Shade::S50), 50);
        assert_eq!(
            InvalidShade(999).to_string(),
            "invalid shade 999 for hue, must be one of: [50,100,200,300,400,500,600,700,800,900]"
        );
    }
}
