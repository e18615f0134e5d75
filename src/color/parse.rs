use crate::color::model::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must start with '#'")]
    MissingHash,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("invalid rgb()/rgba() function")]
    InvalidFunc,
    #[error("component out of range")]
    OutOfRange,
}

#[inline]
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn byte(hi: u8, lo: u8) -> Option<u8> {
    match (nibble(hi), nibble(lo)) {
        (Some(h), Some(l)) => Some(h << 4 | l),
        _ => None,
    }
}

/// Parse exactly `#RRGGBB`, nothing else: no trimming, no short forms.
///
/// Const so that palette literals are checked during compilation.
pub(crate) const fn parse_hex6_strict(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(Empty);
    }
    if bytes[0] != b'#' {
        return Err(MissingHash);
    }
    if bytes.len() != 7 {
        return Err(InvalidLength);
    }

    match (
        byte(bytes[1], bytes[2]),
        byte(bytes[3], bytes[4]),
        byte(bytes[5], bytes[6]),
    ) {
        (Some(r), Some(g), Some(b)) => Ok(Color::rgb(r, g, b)),
        _ => Err(InvalidHex),
    }
}

/// Parse the digits of a hex color (without the leading `#`).
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let short = |c: u8| nibble(c).map(|n| n * 17).ok_or(InvalidHex);
    let long = |hi: u8, lo: u8| byte(hi, lo).ok_or(InvalidHex);

    let rgba = match *hex.as_bytes() {
        [r, g, b] => [short(r)?, short(g)?, short(b)?, 255],
        [r, g, b, a] => [short(r)?, short(g)?, short(b)?, short(a)?],
        [r1, r2, g1, g2, b1, b2] => [long(r1, r2)?, long(g1, g2)?, long(b1, b2)?, 255],
        [r1, r2, g1, g2, b1, b2, a1, a2] => [
            long(r1, r2)?,
            long(g1, g2)?,
            long(b1, b2)?,
            long(a1, a2)?,
        ],
        _ => return Err(InvalidLength),
    };

    Ok(Color::from_rgba(rgba))
}

/// An integer channel in 0..=255.
fn parse_channel(token: &str) -> Result<u8, ColorParseError> {
    token
        .parse::<u16>()
        .ok()
        .filter(|&v| v <= 255)
        .map(|v| v as u8)
        .ok_or(ColorParseError::OutOfRange)
}

/// Alpha is either a 0.0..=1.0 fraction or a 0..=255 integer.
/// A bare `1` or `0` reads as a fraction.
fn parse_alpha(token: &str) -> Result<u8, ColorParseError> {
    if let Ok(int) = token.parse::<u16>() {
        return match int {
            0 => Ok(0),
            1 => Ok(255),
            v if v <= 255 => Ok(v as u8),
            _ => Err(ColorParseError::OutOfRange),
        };
    }

    match token.parse::<f32>() {
        Ok(f) if (0.0..=1.0).contains(&f) => Ok((f * 255.0 + 0.5).floor() as u8),
        _ => Err(ColorParseError::OutOfRange),
    }
}

/// Parse the comma separated arguments of `rgb(r,g,b)` (`with_alpha == false`)
/// or `rgba(r,g,b,a)`.
fn parse_css_args(args: &str, with_alpha: bool) -> Result<Color, ColorParseError> {
    let nums: Vec<&str> = args.split(',').map(str::trim).collect();
    match (with_alpha, nums.as_slice()) {
        (false, [r, g, b]) => Ok(Color::rgb(
            parse_channel(r)?,
            parse_channel(g)?,
            parse_channel(b)?,
        )),
        (true, [r, g, b, a]) => Ok(Color::rgba(
            parse_channel(r)?,
            parse_channel(g)?,
            parse_channel(b)?,
            parse_alpha(a)?,
        )),
        _ => Err(ColorParseError::InvalidFunc),
    }
}

/// Parse a color from any supported textual form.
///
/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` in either case, and the
/// comma form of CSS `rgb()`/`rgba()`. Surrounding whitespace is ignored.
/// For the strict palette literal form use [`Color::try_from_hex`].
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }

    if let Some(rest) = s.strip_prefix('#') {
        return parse_hex(rest.trim());
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_args(args, true);
    }
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_args(args, false);
    }

    Err(InvalidFunc)
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
