//! Appearance preferences.
//!
//! The store only keeps the [`ThemeSettings`] record and knows how to resolve
//! it to concrete colors and fonts; applying them is the client's business.

use crate::error::Result;
use crate::model::{FontFamily, FontSize, Theme, ThemeSettings};
use crate::store::{DataStore, StoreKey};
use serde::Serialize;

/// Resolved colors (CSS color strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Palette {
    fn new(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }

    fn uniform(color: &str) -> Self {
        Self::new(color, color, color)
    }
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::CherryPink => Palette::new(
                "oklch(0.65 0.2 350)",
                "oklch(0.85 0.1 350)",
                "oklch(0.92 0.08 350)",
            ),
            Theme::OceanBlue => Palette::new(
                "oklch(0.55 0.2 250)",
                "oklch(0.75 0.15 260)",
                "oklch(0.85 0.1 270)",
            ),
            Theme::ForestGreen => Palette::new(
                "oklch(0.45 0.2 150)",
                "oklch(0.65 0.15 160)",
                "oklch(0.80 0.1 170)",
            ),
            Theme::SunsetOrange => Palette::new(
                "oklch(0.60 0.2 50)",
                "oklch(0.75 0.15 40)",
                "oklch(0.88 0.1 30)",
            ),
            Theme::Lavender => Palette::new(
                "oklch(0.60 0.15 310)",
                "oklch(0.75 0.12 320)",
                "oklch(0.88 0.08 330)",
            ),
        }
    }
}

impl FontFamily {
    pub fn font_stack(&self) -> &'static str {
        match self {
            FontFamily::Default => "var(--font-geist-sans)",
            FontFamily::Serif => "Georgia, serif",
            FontFamily::Mono => "var(--font-geist-mono)",
        }
    }
}

impl FontSize {
    pub fn px(&self) -> u8 {
        match self {
            FontSize::Small => 14,
            FontSize::Medium => 16,
            FontSize::Large => 18,
        }
    }
}

impl ThemeSettings {
    /// A custom color, when set, replaces the whole preset palette.
    pub fn palette(&self) -> Palette {
        match self.custom_color.as_deref() {
            Some(color) => Palette::uniform(color),
            None => self.theme.palette(),
        }
    }

    pub fn font_stack(&self) -> &'static str {
        self.font_family.font_stack()
    }

    pub fn base_font_size_px(&self) -> u8 {
        self.font_size.px()
    }
}

/// Stored settings, or the defaults when none were saved.
pub fn get<S: DataStore>(store: &S) -> Result<ThemeSettings> {
    Ok(store.load(StoreKey::ThemeSettings)?.unwrap_or_default())
}

pub fn save<S: DataStore>(store: &mut S, settings: &ThemeSettings) -> Result<()> {
    store.save(StoreKey::ThemeSettings, settings)?;
    tracing::info!(theme = %settings.theme, "theme saved");
    Ok(())
}

pub fn presets() -> &'static [Theme] {
    &Theme::ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn defaults_when_nothing_saved() {
        let store = InMemoryStore::new();
        let settings = get(&store).unwrap();
        assert_eq!(settings.theme, Theme::CherryPink);
        assert_eq!(settings.font_family, FontFamily::Default);
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.custom_color, None);
    }

    #[test]
    fn save_then_get() {
        let mut store = InMemoryStore::new();
        let settings = ThemeSettings {
            theme: Theme::Lavender,
            font_family: FontFamily::Mono,
            font_size: FontSize::Large,
            custom_color: None,
        };
        save(&mut store, &settings).unwrap();
        assert_eq!(get(&store).unwrap(), settings);
    }

    #[test]
    fn custom_color_overrides_palette() {
        let settings = ThemeSettings {
            theme: Theme::OceanBlue,
            custom_color: Some("#ff8800".into()),
            ..Default::default()
        };
        let palette = settings.palette();
        assert_eq!(palette.primary, "#ff8800");
        assert_eq!(palette.secondary, "#ff8800");
        assert_eq!(palette.accent, "#ff8800");

        let plain = ThemeSettings {
            custom_color: None,
            ..settings
        };
        assert_eq!(plain.palette(), Theme::OceanBlue.palette());
    }

    #[test]
    fn five_presets_with_distinct_palettes() {
        let palettes: Vec<Palette> = presets().iter().map(Theme::palette).collect();
        assert_eq!(palettes.len(), 5);
        for (i, a) in palettes.iter().enumerate() {
            for b in palettes.iter().skip(i + 1) {
                assert_ne!(a.primary, b.primary);
            }
        }
    }

    #[test]
    fn font_resolution() {
        let settings = ThemeSettings {
            font_family: FontFamily::Serif,
            font_size: FontSize::Small,
            ..Default::default()
        };
        assert_eq!(settings.font_stack(), "Georgia, serif");
        assert_eq!(settings.base_font_size_px(), 14);
    }
}
