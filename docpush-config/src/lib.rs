//! Shared configuration loader for the docpush toolchain.
//!
//! `defaults/docpush.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`DocpushConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use docpush_babel::ir::RgbColor;
use docpush_babel::StyleRules;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../defaults/docpush.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "docpush.toml";

/// Top-level configuration consumed by docpush applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocpushConfig {
    pub style: StyleConfig,
    pub publish: PublishConfig,
}

/// Mirrors the knobs exposed by [`StyleRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub mention_color: ColorConfig,
    pub footer_color: ColorConfig,
    pub bullet_preset: String,
    pub indent_per_level: f64,
    pub first_line_indent: f64,
    pub checked_symbol: String,
    pub unchecked_symbol: String,
}

impl From<StyleConfig> for StyleRules {
    fn from(config: StyleConfig) -> Self {
        StyleRules {
            mention_color: config.mention_color.into(),
            footer_color: config.footer_color.into(),
            bullet_preset: config.bullet_preset,
            indent_per_level: config.indent_per_level,
            first_line_indent: config.first_line_indent,
            checked_symbol: config.checked_symbol,
            unchecked_symbol: config.unchecked_symbol,
        }
    }
}

impl From<&StyleConfig> for StyleRules {
    fn from(config: &StyleConfig) -> Self {
        StyleRules {
            mention_color: config.mention_color.into(),
            footer_color: config.footer_color.into(),
            bullet_preset: config.bullet_preset.clone(),
            indent_per_level: config.indent_per_level,
            first_line_indent: config.first_line_indent,
            checked_symbol: config.checked_symbol.clone(),
            unchecked_symbol: config.unchecked_symbol.clone(),
        }
    }
}

/// An RGB colour, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct ColorConfig {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorConfig {
    /// Builds a colour, rejecting channels outside `0.0..=1.0`.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ConfigError> {
        if [red, green, blue].iter().all(|c| (0.0..=1.0).contains(c)) {
            Ok(ColorConfig { red, green, blue })
        } else {
            Err(ConfigError::Message(format!(
                "invalid colour ({red}, {green}, {blue}): channels must be between 0 and 1"
            )))
        }
    }
}

/// Colour table as written in a config file, before range checking.
#[derive(Deserialize)]
struct RawColor {
    red: f64,
    green: f64,
    blue: f64,
}

impl TryFrom<RawColor> for ColorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        ColorConfig::new(raw.red, raw.green, raw.blue)
    }
}

impl From<ColorConfig> for RgbColor {
    fn from(color: ColorConfig) -> Self {
        RgbColor::new(color.red, color.green, color.blue)
    }
}

impl FromStr for ColorConfig {
    type Err = ConfigError;

    /// Parses `"r,g,b"`, e.g. `0.2,0.4,0.8`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let channels = value
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::Message(format!("invalid colour '{value}': {err}")))?;
        match channels.as_slice() {
            [red, green, blue] => ColorConfig::new(*red, *green, *blue),
            _ => Err(ConfigError::Message(format!(
                "invalid colour '{value}': expected three channels"
            ))),
        }
    }
}

/// Publishing target settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    pub url_template: String,
    pub outbox_dir: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override all three channels of the colour table at `key`.
    pub fn set_color_override(self, key: &str, color: ColorConfig) -> Result<Self, ConfigError> {
        self.set_override(&format!("{key}.red"), color.red)?
            .set_override(&format!("{key}.green"), color.green)?
            .set_override(&format!("{key}.blue"), color.blue)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocpushConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocpushConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.style.bullet_preset, "BULLET_DISC_CIRCLE_SQUARE");
        assert_eq!(config.style.indent_per_level, 36.0);
        assert_eq!(config.publish.outbox_dir, PathBuf::from("docpush-outbox"));
    }

    #[test]
    fn defaults_match_builtin_style_rules() {
        let config = load_defaults().expect("defaults to deserialize");
        let rules: StyleRules = config.style.into();
        assert_eq!(rules, StyleRules::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("style.bullet_preset", "BULLET_CHECKBOX")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.style.bullet_preset, "BULLET_CHECKBOX");
    }

    #[test]
    fn supports_color_overrides() {
        let color: ColorConfig = "1, 0, 0.5".parse().expect("colour to parse");
        let config = Loader::new()
            .set_color_override("style.mention_color", color)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let rules = StyleRules::from(&config.style);
        assert_eq!(rules.mention_color, RgbColor::new(1.0, 0.0, 0.5));
        assert_eq!(rules.footer_color, RgbColor::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!("0.1,0.2".parse::<ColorConfig>().is_err());
        assert!("red,green,blue".parse::<ColorConfig>().is_err());
        assert!("0.1,0.2,3".parse::<ColorConfig>().is_err());
    }

    #[test]
    fn layers_user_files_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("docpush.toml");
        fs::write(
            &path,
            "[style]\nchecked_symbol = \"[x]\"\n\n[publish]\noutbox_dir = \"out\"\n",
        )
        .expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.style.checked_symbol, "[x]");
        assert_eq!(config.style.unchecked_symbol, "☐");
        assert_eq!(config.publish.outbox_dir, PathBuf::from("out"));
    }

    #[test]
    fn rejects_out_of_range_colors_in_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("docpush.toml");
        fs::write(
            &path,
            "[style.footer_color]\nred = 3.0\ngreen = 0.5\nblue = 0.5\n",
        )
        .expect("write config");

        let err = Loader::new().with_file(&path).build().unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"), "{err}");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/docpush.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.style.first_line_indent, 18.0);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/nonexistent/docpush.toml")
            .build()
            .is_err());
    }
}
