//! Shell configuration
//!
//! Optional YAML file; every field falls back to the classic look:
//!
//! ```yaml
//! title: Calculator
//! theme:
//!   component: [240, 241, 243]
//!   component_text: [13, 12, 16]
//!   background: [54, 54, 56]
//! ```

use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// An RGB colour, written as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Colours of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Fill of buttons and the display
    pub component: Rgb,
    /// Text on buttons and the display
    pub component_text: Rgb,
    /// Everything behind the components
    pub background: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            component: Rgb(240, 241, 243),
            component_text: Rgb(13, 12, 16),
            background: Rgb(54, 54, 56),
        }
    }
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Title drawn on the calculator frame
    pub title: String,
    /// Colours
    pub theme: Theme,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
            theme: Theme::default(),
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> ShellResult<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ShellError::config_file(path, e))?;
        let config = Self::from_yaml(&text).map_err(|e| ShellError::config_file(path, e))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml_ng::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(text)
    }

    /// Loads `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> ShellResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Set the frame title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the colours
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
