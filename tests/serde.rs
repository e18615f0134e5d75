#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use tailwind_hues::{palette, Color, DisplayMode, Shade};

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Appearance {
    mode: DisplayMode,
    accent: Color,
    shade: Shade,
}

#[test]
fn appearance_round_trips_through_json() {
    let appearance = Appearance {
        mode: DisplayMode::Dark,
        accent: palette::VIOLET._500,
        shade: Shade::S300,
    };
    let json = serde_json::to_string(&appearance).unwrap();
    assert_eq!(json, r##"{"mode":"dark","accent":"#8b5cf6ff","shade":300}"##);
    assert_eq!(serde_json::from_str::<Appearance>(&json).unwrap(), appearance);
}

#[test]
fn colors_accept_any_supported_form() {
    let c: Color = serde_json::from_str(r#""rgb(139, 92, 246)""#).unwrap();
    assert_eq!(c, palette::VIOLET._500);
}

#[test]
fn bad_values_are_rejected() {
    assert!(serde_json::from_str::<Shade>("950").is_err());
    assert!(serde_json::from_str::<DisplayMode>(r#""dim""#).is_err());
    assert!(serde_json::from_str::<Color>(r##""#12""##).is_err());
}
