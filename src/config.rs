use std::path::Path;

use anyhow::{bail, Context, Result};
use catppuccin_egui::Theme;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::models::view::{ViewMode, LAST_SLIDE};

pub const CONFIG_PATH_ENV: &str = "RSYS_DECK_CONFIG";
pub const MODE_ENV: &str = "RSYS_DECK_MODE";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFlavor {
    Latte,
    Frappe,
    Macchiato,
    #[default]
    Mocha,
}

impl ThemeFlavor {
    pub fn theme(self) -> Theme {
        match self {
            ThemeFlavor::Latte => catppuccin_egui::LATTE,
            ThemeFlavor::Frappe => catppuccin_egui::FRAPPE,
            ThemeFlavor::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeFlavor::Mocha => catppuccin_egui::MOCHA,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    pub exit_ms: u64,
    pub enter_ms: u64,
    /// Vertical travel of the fade, in points.
    pub shift_px: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            exit_ms: 220,
            enter_ms: 280,
            shift_px: 18.0,
        }
    }
}

impl TransitionConfig {
    pub fn exit_secs(&self) -> f64 {
        self.exit_ms as f64 / 1000.0
    }

    pub fn enter_secs(&self) -> f64 {
        self.enter_ms as f64 / 1000.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DeckConfig {
    pub title: String,
    pub initial_mode: ViewMode,
    pub start_slide: usize,
    pub theme: ThemeFlavor,
    pub window: WindowConfig,
    pub transition: TransitionConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: "RSYS".to_owned(),
            initial_mode: ViewMode::Scroll,
            start_slide: 0,
            theme: ThemeFlavor::default(),
            window: WindowConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Reads the file named by `RSYS_DECK_CONFIG` (defaults when unset), then
    /// applies `RSYS_DECK_MODE`.
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!("Loading deck config from {}", path);
                Self::from_file(&path)?
            }
            Err(_) => Self::default(),
        };
        let mode_override = std::env::var(MODE_ENV).ok();
        config.with_mode_override(mode_override.as_deref())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read deck config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid deck config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: DeckConfig = serde_json::from_str(raw).context("failed to parse deck config")?;
        config.validated()
    }

    pub fn with_mode_override(mut self, mode: Option<&str>) -> Result<Self> {
        if let Some(mode) = mode {
            self.initial_mode = mode
                .parse()
                .with_context(|| format!("invalid {}", MODE_ENV))?;
        }
        Ok(self)
    }

    fn validated(mut self) -> Result<Self> {
        if self.start_slide > LAST_SLIDE {
            warn!(
                "start_slide {} is past the last slide, using {}",
                self.start_slide, LAST_SLIDE
            );
            self.start_slide = LAST_SLIDE;
        }
        if !self.transition.shift_px.is_finite() || self.transition.shift_px < 0.0 {
            bail!(
                "transition.shift_px must be a non-negative number, got {}",
                self.transition.shift_px
            );
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DeckConfig::from_json("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.initial_mode, ViewMode::Scroll);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = DeckConfig::from_json(
            r#"{ "initial_mode": "slides", "theme": "latte", "transition": { "exit_ms": 0 } }"#,
        )
        .unwrap();

        assert_eq!(config.initial_mode, ViewMode::Slides);
        assert_eq!(config.theme, ThemeFlavor::Latte);
        assert_eq!(config.transition.exit_ms, 0);
        assert_eq!(config.transition.enter_ms, 280);
    }

    #[test]
    fn start_slide_is_clamped() {
        let config = DeckConfig::from_json(r#"{ "start_slide": 9 }"#).unwrap();
        assert_eq!(config.start_slide, LAST_SLIDE);
    }

    #[test]
    fn negative_shift_is_rejected() {
        let err = DeckConfig::from_json(r#"{ "transition": { "shift_px": -4.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("shift_px"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DeckConfig::from_json("{ initial_mode: ").is_err());
        assert!(DeckConfig::from_json(r#"{ "initial_mode": "deck" }"#).is_err());
    }

    #[test]
    fn mode_override_wins() {
        let config = DeckConfig::default()
            .with_mode_override(Some("slides"))
            .unwrap();
        assert_eq!(config.initial_mode, ViewMode::Slides);

        assert!(DeckConfig::default().with_mode_override(Some("grid")).is_err());
        assert_eq!(
            DeckConfig::default().with_mode_override(None).unwrap(),
            DeckConfig::default()
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DeckConfig::from_file("/nonexistent/rsys-deck.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rsys-deck.json"));
    }

    #[test]
    fn reads_config_file() {
        let path = std::env::temp_dir().join(format!("rsys-deck-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "title": "RSYS Round 1", "start_slide": 2 }"#).unwrap();

        let config = DeckConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.title, "RSYS Round 1");
        assert_eq!(config.start_slide, 2);
    }
}
