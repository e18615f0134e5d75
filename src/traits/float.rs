/// Clamp a generic value between two other values.
#[inline(always)]
pub fn clamp_generic<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// A floating point trait that can be used synonymously
/// for f32 and f64 when reading or building normalized channels.
/// This also prevents use of num-traits as a dependency.
pub trait Float: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Clamp this Float between 0.0 and 1.0
    fn clamp01(self) -> Self {
        clamp_generic(self, Self::ZERO, Self::ONE)
    }

    /// Map a normalized channel onto 0..=255, rounding half up.
    /// NaN maps to 0.
    fn to_channel_u8(self) -> u8 {
        let x = self.clamp01().to_f64();
        if x.is_nan() {
            return 0;
        }
        (x * 255.0 + 0.5).floor() as u8
    }

    /// The normalized value of an 8 bit channel.
    fn from_channel_u8(byte: u8) -> Self {
        Self::from_f64(byte as f64 / 255.0)
    }
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_bytes_map_to_unit_interval() {
        assert_eq!(f32::from_channel_u8(0), 0.0);
        assert_eq!(f32::from_channel_u8(255), 1.0);
        assert_eq!(f64::from_channel_u8(51), 0.2);
    }

    #[test]
    fn channel_u8_rounds_and_clamps() {
        assert_eq!(0.5f32.to_channel_u8(), 128);
        assert_eq!(1.7f64.to_channel_u8(), 255);
        assert_eq!((-0.2f32).to_channel_u8(), 0);
        assert_eq!(f32::NAN.to_channel_u8(), 0);
    }

    #[test]
    fn every_byte_survives_normalization() {
        for b in 0..=255u8 {
            assert_eq!(f32::from_channel_u8(b).to_channel_u8(), b);
            assert_eq!(f64::from_channel_u8(b).to_channel_u8(), b);
        }
    }
}
