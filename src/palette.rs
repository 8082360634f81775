//! Palette generation for escape-time fractal rendering
//!
//! A palette is indexed by escape iteration. Three strategies are provided:
//! a fresh random palette per call, a seeded palette that is identical on
//! every run, and a smooth gradient built from a triangle wave.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::colour::{Entry, Rgb};
use crate::sequence::{SineSequence, FIXED_SEED};

/// Period of the gradient wave in wave units
const WAVE_PERIOD: u64 = 1024;

/// Wave units advanced per iteration
const GRADIENT_SCALE: u64 = 4;

/// Per-channel phase offsets for the gradient
const RED_OFFSET: u64 = 128;
const GREEN_OFFSET: u64 = 0;
const BLUE_OFFSET: u64 = 356;

/// Available palette strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    Random,
    FixedRandom,
    #[default]
    Mandelbrot,
}

impl PaletteKind {
    pub fn generate(&self, max: usize) -> Palette {
        tracing::debug!(kind = %self, max, "generating palette");

        let entries = match self {
            PaletteKind::Random => random_rgb_with(&mut rand::thread_rng(), max)
                .into_iter()
                .map(Entry::Hex)
                .collect(),
            PaletteKind::FixedRandom => fixed_random_rgb(max).into_iter().map(Entry::Hex).collect(),
            PaletteKind::Mandelbrot => mandelbrot_rgb(max).into_iter().map(Entry::Rgba).collect(),
        };

        Palette { entries }
    }

    pub fn all() -> &'static [PaletteKind] {
        &[
            PaletteKind::Random,
            PaletteKind::FixedRandom,
            PaletteKind::Mandelbrot,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Random => "random",
            PaletteKind::FixedRandom => "fixed_random",
            PaletteKind::Mandelbrot => "mandelbrot",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette kind: {0}")]
pub struct UnknownPaletteKind(pub String);

impl FromStr for PaletteKind {
    type Err = UnknownPaletteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPaletteKind(s.to_string()))
    }
}

/// An ordered palette; position is the escape iteration it colours
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<Entry>,
}

impl Palette {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry for an escape iteration, wrapping past the end of the palette
    pub fn entry_for(&self, iteration: u64) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = (iteration % self.entries.len() as u64) as usize;
        self.entries.get(idx)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.entries.iter().map(Entry::to_string).collect()
    }

    /// Channel triples, the form pixel renderers consume
    pub fn to_rgb(&self) -> Vec<(u8, u8, u8)> {
        self.entries.iter().map(|e| e.rgb().as_tuple()).collect()
    }
}

impl From<Vec<Entry>> for Palette {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

/// Convert an untyped palette size to a usable one. Negative sizes give an
/// empty palette.
pub fn clamp_size(max: i64) -> usize {
    if max < 0 {
        tracing::debug!(max, "negative palette size clamped to 0");
        return 0;
    }
    usize::try_from(max).unwrap_or(usize::MAX)
}

/// `max` random `#rrggbb` colours; differs on every call
pub fn random_palette(max: usize) -> Vec<String> {
    PaletteKind::Random.generate(max).to_strings()
}

/// `max` `#rrggbb` colours that are identical on every call and every run
pub fn fixed_random_palette(max: usize) -> Vec<String> {
    PaletteKind::FixedRandom.generate(max).to_strings()
}

/// `max` `rgba(r,g,b,255)` colours cycling smoothly every 256 iterations
pub fn mandelbrot_palette(max: usize) -> Vec<String> {
    PaletteKind::Mandelbrot.generate(max).to_strings()
}

/// `max` random channel triples drawn from the given RNG
pub fn random_rgb_with<R: Rng>(rng: &mut R, max: usize) -> Vec<Rgb> {
    let mut palette = Vec::with_capacity(max);

    for _ in 0..max {
        let r = rng.gen_range(0..=255);
        let g = rng.gen_range(0..=255);
        let b = rng.gen_range(0..=255);
        palette.push(Rgb::new(r, g, b));
    }

    palette
}

fn fixed_random_rgb(max: usize) -> Vec<Rgb> {
    let mut seq = SineSequence::new(FIXED_SEED);
    let mut palette = Vec::with_capacity(max);

    for _ in 0..max {
        let r = seq.next_channel();
        let g = seq.next_channel();
        let b = seq.next_channel();
        palette.push(Rgb::new(r, g, b));
    }

    palette
}

fn mandelbrot_rgb(max: usize) -> Vec<Rgb> {
    let mut palette = Vec::with_capacity(max);

    for i in 0..max as u64 {
        let r = gradient_channel(i, RED_OFFSET);
        let g = gradient_channel(i, GREEN_OFFSET);
        let b = gradient_channel(i, BLUE_OFFSET);
        palette.push(Rgb::new(r, g, b));
    }

    palette
}

#[inline]
fn gradient_channel(n: u64, offset: u64) -> u8 {
    let v = triangle_wave(n, offset, GRADIENT_SCALE);
    // Offsets and scale are multiples of 4, so the wave never reaches 511
    debug_assert!((0..=255).contains(&v), "gradient channel {} out of range", v);
    v as u8
}

/// Ramp up over `[0, 256)`, ramp down over `[256, 512)`, flat zero to 1024.
///
/// The descent is `255 - (n - 255)`, so 256 maps to 254 and 511 maps to -1.
pub fn triangle_wave(n: u64, offset: u64, scale: u64) -> i64 {
    // Reduce every operand first; 1023 * 1023 + 1023 fits comfortably in u64
    let n = ((n % WAVE_PERIOD) * (scale % WAVE_PERIOD) + offset % WAVE_PERIOD) % WAVE_PERIOD;
    let n = n as i64;

    if n < 256 {
        n
    } else if n < 512 {
        255 - (n - 255)
    } else {
        0
    }
}
