use crate::presenter::DEFAULT_SEPARATOR;
use crate::quote::{builtin_catalog, Quote};
use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_FILE: &str = "muse.toml";
const ENV_PREFIX: &str = "MUSE_";
const DEFAULT_NEW_QUOTE_KEY: &str = "n";
/// Keys the app already binds to quit and theme toggle.
const RESERVED_KEYS: [char; 2] = ['q', 't'];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write configuration: {0}")]
    Write(#[from] std::io::Error),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeVariant,
    /// Glyph placed before the attribution.
    pub separator: String,
    /// Key that requests a new quote. Empty means there is no control.
    #[serde(deserialize_with = "key_from_text_or_number")]
    pub new_quote_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Replaces the built-in catalog when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            new_quote_key: DEFAULT_NEW_QUOTE_KEY.to_string(),
            seed: None,
            quotes: None,
        }
    }
}

impl Settings {
    /// Layer defaults, the per-user config file, the local (or explicit)
    /// config file and `MUSE_*` environment variables, in that order.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(user) = Self::user_config_path() {
            figment = figment.merge(Toml::file(user));
        }
        let settings = figment
            .merge(Toml::file(Self::local_config_path(explicit)))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// The file the app reads last and writes back to.
    pub fn local_config_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "muse").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Rewrite only `theme` in the file at `path`.
    ///
    /// Environment and command-line overrides live in the loaded settings,
    /// not in the file, so they are never written back.
    pub fn save_theme(path: &Path, theme: ThemeVariant) -> Result<(), SettingsError> {
        let mut file: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .extract()?;
        file.theme = theme;
        file.save(path)
    }

    /// The "new quote" key, or `None` when unset or clashing with a
    /// built-in binding.
    pub fn control_key(&self) -> Option<char> {
        let key = self.new_quote_key.trim().chars().next()?;
        if RESERVED_KEYS.contains(&key) {
            warn!(key = %key, "new_quote_key clashes with a built-in key; ignoring it");
            return None;
        }
        Some(key)
    }

    pub fn catalog(&self) -> Vec<Quote> {
        self.quotes.clone().unwrap_or_else(builtin_catalog)
    }
}

/// Env values like `MUSE_NEW_QUOTE_KEY=1` arrive as numbers.
fn key_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(text) => text,
        Key::Unsigned(n) => n.to_string(),
        Key::Signed(n) => n.to_string(),
    })
}
