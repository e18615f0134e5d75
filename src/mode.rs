//! Light/dark display mode and the sources a host uses to report it.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display mode {0:?}, expected \"light\" or \"dark\"")]
pub struct UnknownMode(pub String);

impl DisplayMode {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownMode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Anything that can report the current display mode.
///
/// Implementations are queried on every color resolution and must not cache.
pub trait ModeSource {
    fn display_mode(&self) -> DisplayMode;
}

impl ModeSource for DisplayMode {
    fn display_mode(&self) -> DisplayMode {
        *self
    }
}

impl<F> ModeSource for F
where
    F: Fn() -> DisplayMode,
{
    fn display_mode(&self) -> DisplayMode {
        self()
    }
}

/// A mode switch shared between the host that flips it and the colors that
/// read it. Clones observe the same switch.
#[derive(Debug, Clone, Default)]
pub struct SharedMode {
    dark: Arc<AtomicBool>,
}

impl SharedMode {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(mode.is_dark())),
        }
    }

    pub fn get(&self) -> DisplayMode {
        if self.dark.load(Ordering::Relaxed) {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn set(&self, mode: DisplayMode) {
        self.dark.store(mode.is_dark(), Ordering::Relaxed);
    }

    /// Flip the mode, returning the new one.
    pub fn toggle(&self) -> DisplayMode {
        let was_dark = self.dark.fetch_xor(true, Ordering::Relaxed);
        if was_dark {
            DisplayMode::Light
        } else {
            DisplayMode::Dark
        }
    }
}

impl ModeSource for SharedMode {
    fn display_mode(&self) -> DisplayMode {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(DisplayMode::from_name("Dark"), Some(DisplayMode::Dark));
        assert_eq!(" LIGHT ".parse::<DisplayMode>(), Ok(DisplayMode::Light));
        assert_eq!(
            "dim".parse::<DisplayMode>(),
            Err(UnknownMode("dim".to_string()))
        );
        assert_eq!(DisplayMode::Dark.to_string(), "dark");
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
    }

    #[test]
    fn shared_mode_is_seen_by_clones() {
        let host = SharedMode::new(DisplayMode::Light);
        let reader = host.clone();
        assert_eq!(reader.display_mode(), DisplayMode::Light);
        host.set(DisplayMode::Dark);
        assert_eq!(reader.display_mode(), DisplayMode::Dark);
        assert_eq!(host.toggle(), DisplayMode::Light);
        assert_eq!(reader.get(), DisplayMode::Light);
    }

    #[test]
    fn closures_are_read_each_time() {
        let dark = Cell::new(false);
        let source = || {
            if dark.get() {
                DisplayMode::Dark
            } else {
                DisplayMode::Light
            }
        };
        assert_eq!(source.display_mode(), DisplayMode::Light);
        dark.set(true);
        assert_eq!(source.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn shared_mode_crosses_threads() {
        let mode = SharedMode::default();
        let worker = mode.clone();
        std::thread::spawn(move || worker.set(DisplayMode::Dark))
            .join()
            .unwrap();
        assert_eq!(mode.get(), DisplayMode::Dark);
    }
}
