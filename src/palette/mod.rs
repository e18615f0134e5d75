//! Predefined hues from the TailwindCSS framework.
//!
//! Each family is a `static` (`palette::INDIGO._900`), so a malformed literal
//! in the table fails the build. Families can also be found by name at
//! runtime with [`hue`] and single colors with [`lookup`]:
//!
//! ```
//! use tailwind_hues::palette;
//!
//! assert_eq!(palette::hue("blue-gray"), Some(&palette::BLUE_GRAY));
//! assert_eq!(palette::lookup("amber-500").unwrap(), palette::AMBER._500);
//! ```
//!
//! The legacy gray families (`gray`, `trueGray`, `coolGray`, `blueGray`,
//! `warmGray`) overlap but are all kept, since callers refer to them by name.

mod tailwind;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

pub use tailwind::*;

use crate::color::Color;
use crate::hue::{Hue, InvalidShade};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown hue {0:?}")]
    UnknownHue(String),
    #[error("{0:?} names a hue but no shade, expected e.g. \"{0}-500\"")]
    MissingShade(String),
    #[error("shade {0:?} is not a number")]
    BadShade(String),
    #[error(transparent)]
    Shade(#[from] InvalidShade),
}

static BY_NAME: OnceLock<BTreeMap<String, &'static Hue>> = OnceLock::new();

/// Fold the spellings `blueGray`, `blue-gray`, `BLUE_GRAY` onto one key.
fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn build_index() -> BTreeMap<String, &'static Hue> {
    let index: BTreeMap<_, _> = HUES
        .iter()
        .map(|&(name, hue)| (name_key(name), hue))
        .collect();
    debug!(hues = index.len(), "built palette name index");
    index
}

#[inline]
fn index() -> &'static BTreeMap<String, &'static Hue> {
    BY_NAME.get_or_init(build_index)
}

/// Find a hue by name, ignoring case and `-`/`_` separators.
pub fn hue(name: &str) -> Option<&'static Hue> {
    let found = index().get(&name_key(name)).copied();
    if found.is_none() {
        trace!(name, "no hue with this name");
    }
    found
}

/// Resolve a `<hue>-<shade>` token such as `"amber-500"` or
/// `"blue_gray_900"` to its color.
pub fn lookup(token: &str) -> Result<Color, LookupError> {
    let token = token.trim();

    let missing_or_unknown = || match hue(token) {
        Some(_) => LookupError::MissingShade(token.to_string()),
        None => LookupError::UnknownHue(token.to_string()),
    };

    let Some((name, level)) = token.rsplit_once(['-', '_']) else {
        return Err(missing_or_unknown());
    };
    let Ok(level) = level.parse::<u16>() else {
        // "blue-gray" splits into "blue" and "gray"
        if hue(token).is_none() && hue(name).is_some() {
            return Err(LookupError::BadShade(level.to_string()));
        }
        return Err(missing_or_unknown());
    };

    let hue = hue(name).ok_or_else(|| LookupError::UnknownHue(name.to_string()))?;
    Ok(hue.try_at(level)?)
}

/// Canonical names of all hues, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    HUES.iter().map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_key_folds_spellings() {
        assert_eq!(name_key("blueGray"), "bluegray");
        assert_eq!(name_key("blue-gray"), "bluegray");
        assert_eq!(name_key("BLUE_GRAY"), "bluegray");
    }

    #[test]
    fn spaces_are_not_separators() {
        assert_eq!(hue("blue gray"), None);
        assert_eq!(
            lookup("amber 500"),
            Err(LookupError::UnknownHue("amber 500".to_string()))
        );
    }

    #[test]
    fn every_name_is_indexed() {
        assert_eq!(index().len(), HUES.len());
        for (name, expected) in HUES.iter() {
            assert_eq!(hue(name), Some(*expected));
        }
    }

    #[test]
    fn hue_finds_statics() {
        assert_eq!(hue("lightBlue"), Some(&LIGHT_BLUE));
        assert_eq!(hue("light-blue"), Some(&LIGHT_BLUE));
        assert_eq!(hue("TRUE_GRAY"), Some(&TRUE_GRAY));
        assert_eq!(hue("slate"), None);
        assert_eq!(hue(""), None);
    }

    #[test]
    fn lookup_resolves_tokens() {
        assert_eq!(lookup("amber-500"), Ok(AMBER._500));
        assert_eq!(lookup("blue-gray-900"), Ok(BLUE_GRAY._900));
        assert_eq!(lookup("coolGray_50"), Ok(COOL_GRAY._50));
        assert_eq!(lookup(" teal-400 "), Ok(TEAL._400));
    }

    #[test]
    fn lookup_errors() {
        assert_eq!(
            lookup("amber"),
            Err(LookupError::MissingShade("amber".to_string()))
        );
        assert_eq!(
            lookup("blue-gray"),
            Err(LookupError::MissingShade("blue-gray".to_string()))
        );
        assert_eq!(
            lookup("slate-500"),
            Err(LookupError::UnknownHue("slate".to_string()))
        );
        assert_eq!(
            lookup("magenta"),
            Err(LookupError::UnknownHue("magenta".to_string()))
        );
        assert_eq!(
            lookup("red-dark"),
            Err(LookupError::BadShade("dark".to_string()))
        );
        assert_eq!(
            lookup("red-950"),
            Err(LookupError::Shade(InvalidShade(950)))
        );
    }

    #[test]
    fn names_are_in_declaration_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 22);
        assert_eq!(names.first(), Some(&"amber"));
        assert_eq!(names.last(), Some(&"teal"));
    }
}
