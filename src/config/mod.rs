pub mod enums;

use std::error::Error;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use enums::ColorFormatKind;

use crate::color::{ColorFormat, ColorValue};
use crate::filesystem::get_config_directory;

const FILE_NAME: &str = "config.toml";

/// Formatting preferences, read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(deserialize_with = "deserialize_insensitive")]
    pub preferred_format: ColorFormatKind,
    pub uppercase_hex: bool,
    pub hash_prefix_in_hex: bool,
    pub legacy_syntax: bool,
    #[serde(deserialize_with = "deserialize_insensitive_list")]
    pub shown_formats: Vec<ColorFormatKind>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            preferred_format: ColorFormatKind::Hex,
            uppercase_hex: false,
            hash_prefix_in_hex: true,
            legacy_syntax: false,
            shown_formats: vec![
                ColorFormatKind::Hex,
                ColorFormatKind::Hsl,
                ColorFormatKind::Rgb,
                ColorFormatKind::Lch,
            ],
        }
    }
}

impl Preferences {
    /// The concrete format for `kind` under these preferences.
    pub fn color_format(&self, kind: ColorFormatKind) -> ColorFormat {
        match kind {
            ColorFormatKind::Hex => ColorFormat::Hex {
                uppercase: self.uppercase_hex,
                prefix: self.hash_prefix_in_hex,
            },
            ColorFormatKind::Hsl if self.legacy_syntax => ColorFormat::HslLegacy,
            ColorFormatKind::Hsl => ColorFormat::Hsl,
            ColorFormatKind::Rgb if self.legacy_syntax => ColorFormat::RgbLegacy,
            ColorFormatKind::Rgb => ColorFormat::Rgb,
            ColorFormatKind::Oklch => ColorFormat::Oklch,
            ColorFormatKind::Lch => ColorFormat::Lch,
            ColorFormatKind::Hsb => ColorFormat::Hsb,
        }
    }

    pub fn preferred_color_format(&self) -> ColorFormat {
        self.color_format(self.preferred_format)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl ColorValue {
    /// Formats the color the way the user prefers to copy it.
    pub fn string_representation(self, preferences: &Preferences) -> String {
        self.format(preferences.preferred_color_format())
    }
}

pub fn deserialize_insensitive<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_insensitive_list<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    D: serde::Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|s| T::from_str(s).map_err(serde::de::Error::custom))
        .collect()
}

pub fn config_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(FILE_NAME))
}

/// Reads preferences from `path`. A missing file yields the defaults; the
/// file is never created or written.
pub fn read(path: &Path) -> Result<Preferences, Box<dyn Error>> {
    if !path.exists() {
        debug!(path = %path.display(), "No configuration file, using defaults");
        return Ok(Preferences::default());
    }

    let toml = std::fs::read_to_string(path)?;
    let preferences = toml::from_str(&toml)?;
    info!(path = %path.display(), "Loaded configuration");

    Ok(preferences)
}

/// Reads preferences from the default location.
pub fn read_config() -> Result<Preferences, Box<dyn Error>> {
    match config_path() {
        Some(path) => read(&path),
        None => {
            debug!("No configuration directory, using defaults");
            Ok(Preferences::default())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let preferences: Preferences = toml::from_str("uppercase_hex = true").unwrap();

        assert!(preferences.uppercase_hex);
        assert_eq!(preferences.preferred_format, ColorFormatKind::Hex);
        assert_eq!(preferences.shown_formats, Preferences::default().shown_formats);
    }

    #[test]
    fn format_names_are_case_insensitive() {
        let preferences: Preferences = toml::from_str(
            r#"
            preferred_format = "OKLCH"
            shown_formats = ["Hex", "hsv", "lch"]
            "#,
        )
        .unwrap();

        assert_eq!(preferences.preferred_format, ColorFormatKind::Oklch);
        assert_eq!(
            preferences.shown_formats,
            vec![ColorFormatKind::Hex, ColorFormatKind::Hsb, ColorFormatKind::Lch]
        );
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(toml::from_str::<Preferences>(r#"preferred_format = "cmyk""#).is_err());
    }

    #[test]
    fn toggles_shape_the_concrete_format() {
        let preferences = Preferences {
            uppercase_hex: true,
            hash_prefix_in_hex: false,
            legacy_syntax: true,
            ..Preferences::default()
        };
        let color = ColorValue::new(0.0, 0.0, 1.0, 0.5);

        assert_eq!(color.string_representation(&preferences), "0000FF");
        assert_eq!(preferences.color_format(ColorFormatKind::Rgb), ColorFormat::RgbLegacy);
        assert_eq!(color.format(preferences.color_format(ColorFormatKind::Hsl)), "hsl(240, 100%, 50%, 0.50)");
        assert_eq!(preferences.color_format(ColorFormatKind::Oklch), ColorFormat::Oklch);
    }

    #[test]
    fn serializes_back_to_toml() {
        let toml = Preferences::default().to_toml().unwrap();

        assert!(toml.contains(r#"preferred_format = "hex""#));
        assert_eq!(toml::from_str::<Preferences>(&toml).unwrap(), Preferences::default());
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = std::env::temp_dir().join("color-picker-config-that-does-not-exist.toml");

        assert_eq!(read(&path).unwrap(), Preferences::default());
    }
}
