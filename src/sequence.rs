//! Deterministic sine-based number sequence
//!
//! Produces the same fractions on every run and every platform with IEEE
//! `f64::sin`, which is what makes the fixed palette reproducible.

/// Seed used by the fixed random palette
pub const FIXED_SEED: u64 = 3;

/// Stateful generator of pseudo-random fractions in `[0, 1)`
#[derive(Debug, Clone)]
pub struct SineSequence {
    seed: u64,
}

impl SineSequence {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Next draw scaled to a colour channel
    pub fn next_channel(&mut self) -> u8 {
        let fraction = self.draw();
        // fraction < 1.0 so the product stays below 256
        (fraction * 256.0).floor() as u8
    }

    fn draw(&mut self) -> f64 {
        let x = (self.seed as f64).sin() * 10000.0;
        self.seed += 1;
        x - x.floor()
    }
}

impl Default for SineSequence {
    fn default() -> Self {
        Self::new(FIXED_SEED)
    }
}

impl Iterator for SineSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.draw())
    }
}
