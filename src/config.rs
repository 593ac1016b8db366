use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MIN_FRAME_RATE_MS: u64 = 16;
pub const MAX_FRAME_RATE_MS: u64 = 1000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,
}

fn default_theme() -> String {
    crate::ui::theme::DEFAULT_THEME.to_string()
}
fn default_animate() -> bool {
    true
}
fn default_frame_rate_ms() -> u64 {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            animate: default_animate(),
            frame_rate_ms: default_frame_rate_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means defaults; a file that exists but does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termdots")
            .join("config.toml")
    }

    /// Clamp the frame interval into a sane range and fall back to the
    /// default theme when the name is blank.
    pub fn normalize(&mut self) {
        self.frame_rate_ms = self.frame_rate_ms.clamp(MIN_FRAME_RATE_MS, MAX_FRAME_RATE_MS);
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms)
    }
}
