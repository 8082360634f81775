//! Environment configuration for the palette binary

use thiserror::Error;

use crate::palette::{clamp_size, PaletteKind, UnknownPaletteKind};

const DEFAULT_SIZE: usize = 256;

/// Largest `PALETTE_SIZE` accepted
pub const MAX_SIZE: usize = 1 << 20;

/// How the palette is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Lines,
    /// A JSON array of entry strings
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Kind(#[from] UnknownPaletteKind),
    #[error("PALETTE_SIZE must be an integer no larger than 1048576, got {0:?}")]
    Size(String),
    #[error("PALETTE_FORMAT must be `lines` or `json`, got {0:?}")]
    Format(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kind: PaletteKind,
    pub size: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: PaletteKind::default(),
            size: DEFAULT_SIZE,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Read `PALETTE`, `PALETTE_SIZE` and `PALETTE_FORMAT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(kind) = lookup("PALETTE") {
            config.kind = kind.parse()?;
        }

        if let Some(size) = lookup("PALETTE_SIZE") {
            let size: i64 = size
                .trim()
                .parse()
                .map_err(|_| ConfigError::Size(size.clone()))?;
            let clamped = clamp_size(size);
            if clamped > MAX_SIZE {
                return Err(ConfigError::Size(size.to_string()));
            }
            config.size = clamped;
        }

        if let Some(format) = lookup("PALETTE_FORMAT") {
            config.format = match format.trim().to_ascii_lowercase().as_str() {
                "lines" => OutputFormat::Lines,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::Format(format)),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.kind, PaletteKind::Mandelbrot);
        assert_eq!(config.size, 256);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("PALETTE", "fixed_random"),
            ("PALETTE_SIZE", "16"),
            ("PALETTE_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.kind, PaletteKind::FixedRandom);
        assert_eq!(config.size, 16);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_negative_size_clamped() {
        let config = Config::from_lookup(lookup(&[("PALETTE_SIZE", "-3")])).unwrap();
        assert_eq!(config.size, 0);
    }

    #[test]
    fn test_size_upper_bound() {
        let config = Config::from_lookup(lookup(&[("PALETTE_SIZE", "1048576")])).unwrap();
        assert_eq!(config.size, MAX_SIZE);
        assert!(matches!(
            Config::from_lookup(lookup(&[("PALETTE_SIZE", "1048577")])),
            Err(ConfigError::Size(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("PALETTE_SIZE", "1000000000000")])),
            Err(ConfigError::Size(_))
        ));
        assert!(ConfigError::Size("x".into()).to_string().contains(&MAX_SIZE.to_string()));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("PALETTE", "fire")])),
            Err(ConfigError::Kind(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("PALETTE_SIZE", "2.5")])),
            Err(ConfigError::Size(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("PALETTE_FORMAT", "xml")])),
            Err(ConfigError::Format(_))
        ));
    }
}
