//! Static TailwindCSS hue palette.
//!
//! ```
//! use tailwind_hues::{palette, DisplayMode, SharedMode};
//!
//! let heading = palette::INDIGO._900;
//! assert_eq!(heading, tailwind_hues::Color::from_hex("#312E81"));
//!
//! let mode = SharedMode::new(DisplayMode::Light);
//! let label = palette::AMBER.dynamic_by(|h| h._800, |h| h._200).bind(mode.clone());
//! assert_eq!(label.get(), palette::AMBER._800);
//! mode.toggle();
//! assert_eq!(label.get(), palette::AMBER._200);
//! ```

pub mod color;
pub mod hue;
pub mod mode;
pub mod palette;
pub mod traits;

pub use color::{parse_color, Color, ColorFloat, ColorParseError};
pub use hue::{BoundColor, DynamicColor, Hue, InvalidShade, Shade};
pub use mode::{DisplayMode, ModeSource, SharedMode, UnknownMode};
pub use palette::LookupError;
