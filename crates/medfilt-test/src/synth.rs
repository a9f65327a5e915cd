//! Deterministic synthetic test images
//!
//! Regression tests build their inputs here instead of loading image files,
//! so that every run sees bit-identical data.

use crate::error::{TestError, TestResult};
use medfilt_core::Pix;

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Next byte, taken from the high bits (the low bits of an LCG are weak).
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

fn build(name: &'static str, width: u32, height: u32, samples: &[u8]) -> TestResult<Pix> {
    Pix::from_gray_bytes(width, height, samples).map_err(|source| TestError::ImageBuild { name, source })
}

/// Uniform 8 bpp image filled with `val`.
pub fn make_uniform(width: u32, height: u32, val: u8) -> TestResult<Pix> {
    let n = (width as usize) * (height as usize);
    build("uniform", width, height, &vec![val; n])
}

/// 8 bpp image from explicit rows; all rows must have the same length.
pub fn make_from_rows(rows: &[&[u8]]) -> TestResult<Pix> {
    let width = rows.first().map_or(0, |r| r.len());
    if rows.iter().any(|r| r.len() != width) {
        return Err(TestError::InvalidParameters("ragged rows".into()));
    }
    let samples: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    build("rows", width as u32, rows.len() as u32, &samples)
}

/// Image whose pixel `(x, y)` is `step * (y * width + x + 1)`, wrapping at 256.
pub fn make_ramp(width: u32, height: u32, step: u8) -> TestResult<Pix> {
    let samples: Vec<u8> = (0..width * height)
        .map(|i| ((i + 1) as u8).wrapping_mul(step))
        .collect();
    build("ramp", width, height, &samples)
}

/// Uniform `background` image with a single `val` pixel at `(x, y)`.
pub fn make_impulse(width: u32, height: u32, x: u32, y: u32, background: u8, val: u8) -> TestResult<Pix> {
    if x >= width || y >= height {
        return Err(TestError::InvalidParameters(format!(
            "impulse ({x}, {y}) outside {width}x{height}"
        )));
    }
    let mut samples = vec![background; (width as usize) * (height as usize)];
    samples[(y * width + x) as usize] = val;
    build("impulse", width, height, &samples)
}

/// Seeded pseudo-random 8 bpp image covering the full 0..=255 range.
pub fn make_random(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut rng = SimpleRng::new(seed);
    let samples: Vec<u8> = (0..width * height).map(|_| rng.next_u8()).collect();
    build("random", width, height, &samples)
}

/// Seeded pseudo-random image restricted to `levels` distinct values.
///
/// Few levels produce many ties inside each window, which exercises the
/// histogram walks more than uniformly random data.
pub fn make_random_levels(width: u32, height: u32, levels: u8, seed: u64) -> TestResult<Pix> {
    if levels == 0 {
        return Err(TestError::InvalidParameters("levels must be >= 1".into()));
    }
    let mut rng = SimpleRng::new(seed);
    let spacing = 255 / levels.max(2).saturating_sub(1).max(1);
    let samples: Vec<u8> = (0..width * height)
        .map(|_| (rng.next_u8() % levels).saturating_mul(spacing))
        .collect();
    build("random_levels", width, height, &samples)
}

/// Random image with salt (255) and pepper (0) noise at roughly `percent`.
pub fn make_salt_and_pepper(base: &Pix, percent: u8, seed: u64) -> TestResult<Pix> {
    let mut samples = base
        .to_gray_bytes()
        .map_err(|source| TestError::ImageBuild { name: "salt_and_pepper", source })?;
    let mut rng = SimpleRng::new(seed);
    for s in samples.iter_mut() {
        let roll = (rng.next_u64() >> 33) % 100;
        if roll < u64::from(percent) {
            *s = if rng.next_u64() >> 63 == 0 { 0 } else { 255 };
        }
    }
    build("salt_and_pepper", base.width(), base.height(), &samples)
}
