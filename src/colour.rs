//! Colour values and the two textual forms palettes are emitted in

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Alpha written into every `rgba(...)` entry.
///
/// Gradient palettes have always emitted the literal 255 here, so renderers
/// reading them expect it verbatim.
pub const LEGACY_ALPHA: u8 = 255;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase and zero padded
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r,g,b,255)`
    pub fn to_rgba(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, LEGACY_ALPHA)
    }

    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// A palette entry, tagged with the textual form its generator emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    Hex(Rgb),
    Rgba(Rgb),
}

impl Entry {
    pub fn rgb(&self) -> Rgb {
        match self {
            Entry::Hex(rgb) | Entry::Rgba(rgb) => *rgb,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Hex(rgb) => f.write_str(&rgb.to_hex()),
            Entry::Rgba(rgb) => f.write_str(&rgb.to_rgba()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourParseError {
    #[error("empty colour string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("invalid rgba() function")]
    InvalidFunc,
    #[error("component out of range")]
    OutOfRange,
    #[error("alpha must be 255")]
    InvalidAlpha,
}

impl FromStr for Entry {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColourParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).map(Entry::Hex);
        }

        let lower = s.to_ascii_lowercase();
        match lower.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            Some(args) => parse_rgba_args(args).map(Entry::Rgba),
            None => Err(ColourParseError::InvalidFunc),
        }
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, ColourParseError> {
    if hex.len() != 6 {
        return Err(ColourParseError::InvalidLength);
    }
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourParseError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColourParseError::InvalidHex)
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_rgba_args(args: &str) -> Result<Rgb, ColourParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(ColourParseError::InvalidFunc);
    }

    let mut channels = [0u8; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|c| c.is_ascii_digit()) {
            return Err(ColourParseError::InvalidFunc);
        }
        *slot = part.parse().map_err(|_| ColourParseError::OutOfRange)?;
    }

    // Entries only carry LEGACY_ALPHA, so any other alpha cannot be represented
    if channels[3] != LEGACY_ALPHA {
        return Err(ColourParseError::InvalidAlpha);
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
