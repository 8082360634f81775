//! Colour palettes for escape-time fractal renders

pub mod colour;
pub mod config;
pub mod palette;
pub mod sequence;

pub use colour::{ColourParseError, Entry, Rgb};
pub use palette::{
    clamp_size, fixed_random_palette, mandelbrot_palette, random_palette, random_rgb_with,
    triangle_wave, Palette, PaletteKind,
};
pub use sequence::SineSequence;
