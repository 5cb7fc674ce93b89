//! Configuration types for bdwild.
//!
//! [`Config::load`] reads `~/.config/bdwild/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::query::{DEFAULT_RELATED_LIMIT, DEFAULT_SUGGESTION_LIMIT};
use crate::types::SpeciesId;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[catalog]
# data_dir = "/path/to/dataset"   # directory holding species.json / posts.json
featured = [1, 3, 4]

[search]
suggestion_limit = 4
related_limit    = 3

[ui]
theme               = "default"
list_pane_width_pct = 40
show_local_names    = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/bdwild/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Dataset directory. `None` uses the dataset built into the binary.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Species shown on the home page, in this order.
    #[serde(default = "default_featured")]
    pub featured: Vec<SpeciesId>,
}

fn default_featured() -> Vec<SpeciesId> { vec![SpeciesId(1), SpeciesId(3), SpeciesId(4)] }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { data_dir: None, featured: default_featured() }
    }
}

/// `[search]` section of `config.toml`.
///
/// The minimum input length for suggestions is fixed at
/// [`crate::query::MIN_SUGGESTION_CHARS`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_suggestion_limit() -> usize { DEFAULT_SUGGESTION_LIMIT }
fn default_related_limit() -> usize { DEFAULT_RELATED_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            related_limit: default_related_limit(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_list_pane_width_pct")]
    pub list_pane_width_pct: u16,
    #[serde(default = "default_show_local_names")]
    pub show_local_names: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_list_pane_width_pct() -> u16 { 40 }
fn default_show_local_names() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            list_pane_width_pct: default_list_pane_width_pct(),
            show_local_names: default_show_local_names(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/bdwild/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("bdwild")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
