use std::path::Path;

use anyhow::Context as _;
use basalt_core::{Color, MaterialDescriptor};
use serde::Deserialize;

use crate::traits::BasaltApp;

/// Initial window and engine configuration.
///
/// Deserializable so a deployment can ship a TOML file next to the binary;
/// every field falls back to its default when missing from the file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Linear RGBA clear color.
    pub clear_color: [f32; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Basalt Application".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: Color::SLATE.to_array(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// A present-but-malformed file is still an error — silently ignoring a
    /// typo'd config is worse than refusing to start.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::from_toml_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// The main entry point.  Builder-pattern configuration, then [`App::run`].
pub struct App<A: BasaltApp> {
    config: AppConfig,
    materials: Vec<MaterialDescriptor>,
    app_state: A,
}

impl<A: BasaltApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            materials: vec![MaterialDescriptor::default()],
            app_state,
        }
    }

    /// Replaces the whole config (e.g. one loaded from TOML).
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.config.clear_color = color.to_array();
        self
    }

    /// Sets the materials uploaded to the bank at startup.
    ///
    /// The renderer refuses an empty bank, so `run` fails up front if this
    /// is called with an empty vec.
    pub fn with_materials(mut self, materials: Vec<MaterialDescriptor>) -> Self {
        self.materials = materials;
        self
    }

    /// Runs the main event loop.  Returns once the window closes.
    pub fn run(self) -> anyhow::Result<()> {
        crate::runner::run_internal(self.config, self.materials, self.app_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            title = "Demo"
            vsync = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.title, "Demo");
        assert!(!cfg.vsync);
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.width, 1280);
        assert_eq!(cfg.height, 720);
    }

    #[test]
    fn config_parses_clear_color() {
        let cfg: AppConfig = toml::from_str("clear_color = [1.0, 0.0, 0.0, 1.0]").unwrap();
        assert_eq!(cfg.clear_color, Color::RED.to_array());
    }
}
