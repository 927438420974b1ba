//! Built-in visual themes.
//!
//! A theme is plain data: a [`ThemePreset`] record of style metrics and colors.
//! One routine, [`ThemePreset::apply`], writes any record into a [`Style`], and
//! [`ThemeCatalog`] finds records by id.
//!
//! ```rust,ignore
//! let catalog = ThemeCatalog::builtin();
//! catalog.apply("theme.valve", &mut style, settings.rgb_color)?;
//! ```

mod duckred;
mod valve;
mod windark;

use std::fmt;

use indexmap::IndexMap;
use sigil_engine::coords::ColorRgba;

use crate::style::{Style, StyleColor, StyleMetrics};

pub use duckred::DUCKRED;
pub use valve::VALVE;
pub use windark::WINDARK;

/// Immutable theme record.
#[derive(Debug)]
pub struct ThemePreset {
    /// Stable identifier, e.g. `"theme.windark"`.
    pub id: &'static str,
    /// Display name for theme pickers.
    pub name: &'static str,
    pub metrics: StyleMetrics,
    /// Color table entries this theme owns. Roles not listed keep their current value.
    pub colors: &'static [(StyleColor, ColorRgba)],
}

impl ThemePreset {
    /// Overwrites `style` with this theme's metrics and colors.
    ///
    /// With `rgb_mode`, [`StyleColor::Border`] is left alone so a color-cycling
    /// border effect keeps control of it. Always returns `true`.
    pub fn apply(&self, style: &mut Style, rgb_mode: bool) -> bool {
        style.set_metrics(self.metrics);
        for &(role, color) in self.colors {
            if rgb_mode && role == StyleColor::Border {
                continue;
            }
            style.set_color(role, color);
        }
        log::debug!("applied theme {} (rgb_mode={rgb_mode})", self.id);
        true
    }

    /// This theme's recorded color for `role`, if it owns one.
    pub fn color(&self, role: StyleColor) -> Option<ColorRgba> {
        self.colors.iter().find(|(r, _)| *r == role).map(|&(_, c)| c)
    }
}

/// Error returned by [`ThemeCatalog::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    UnknownTheme(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownTheme(id) => write!(f, "unknown theme: {id}"),
        }
    }
}

impl std::error::Error for ThemeError {}

/// Theme records keyed by id, in registration order.
#[derive(Debug, Default, Clone)]
pub struct ThemeCatalog {
    themes: IndexMap<&'static str, &'static ThemePreset>,
}

impl ThemeCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in theme.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for preset in [&WINDARK, &DUCKRED, &VALVE] {
            catalog.register(preset);
        }
        catalog
    }

    /// Adds `preset`. A preset with the same id replaces the earlier one in place.
    pub fn register(&mut self, preset: &'static ThemePreset) {
        if self.themes.insert(preset.id, preset).is_some() {
            log::warn!("theme {} registered twice; keeping the latest", preset.id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static ThemePreset> {
        self.themes.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ThemePreset> + '_ {
        self.themes.values().copied()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Applies the theme named `id`. An unknown id leaves `style` untouched.
    pub fn apply(
        &self,
        id: &str,
        style: &mut Style,
        rgb_mode: bool,
    ) -> Result<&'static ThemePreset, ThemeError> {
        let Some(preset) = self.get(id) else {
            log::warn!("unknown theme {id}");
            return Err(ThemeError::UnknownTheme(id.to_owned()));
        };
        preset.apply(style, rgb_mode);
        Ok(preset)
    }
}
