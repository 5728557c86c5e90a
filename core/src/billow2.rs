use crate::NoiseModule;
use crate::error::{Result, check_finite, check_positive};
use crate::noisegen::{NoiseQuality, gradient_coherent_noise, make_int32_range};
use crate::perlin2::{
    DEFAULT_PERLIN_FREQUENCY, DEFAULT_PERLIN_LACUNARITY, DEFAULT_PERLIN_OCTAVE_COUNT,
    DEFAULT_PERLIN_PERSISTENCE, DEFAULT_PERLIN_QUALITY, DEFAULT_PERLIN_SEED, check_octave_count,
};

// Billowy noise, suitable for clouds and rocks.
// Same octave sum as Perlin2D but every octave is folded with 2|signal| - 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Billow2D {
    seed: i32,
    frequency: f64,
    lacunarity: f64,
    persistence: f64,
    octave_count: usize,
    quality: NoiseQuality,
}

impl Default for Billow2D {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PERLIN_SEED,
            frequency: DEFAULT_PERLIN_FREQUENCY,
            lacunarity: DEFAULT_PERLIN_LACUNARITY,
            persistence: DEFAULT_PERLIN_PERSISTENCE,
            octave_count: DEFAULT_PERLIN_OCTAVE_COUNT,
            quality: DEFAULT_PERLIN_QUALITY,
        }
    }
}

impl Billow2D {
    pub fn new(seed: i32, frequency: f64, persistence: f64, octave_count: usize) -> Result<Self> {
        let mut billow = Self::default();
        billow.set_seed(seed);
        billow.set_frequency(frequency)?;
        billow.set_persistence(persistence)?;
        billow.set_octave_count(octave_count)?;
        Ok(billow)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn octave_count(&self) -> usize {
        self.octave_count
    }

    pub fn quality(&self) -> NoiseQuality {
        self.quality
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.frequency = check_positive("frequency", frequency)?;
        Ok(())
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<()> {
        self.lacunarity = check_positive("lacunarity", lacunarity)?;
        Ok(())
    }

    pub fn set_persistence(&mut self, persistence: f64) -> Result<()> {
        self.persistence = check_finite("persistence", persistence)?;
        Ok(())
    }

    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<()> {
        self.octave_count = check_octave_count(octave_count)?;
        Ok(())
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }
}

impl NoiseModule for Billow2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        debug_assert!(self.octave_count >= 1);
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;

        for octave in 0..self.octave_count {
            let nx = make_int32_range(x);
            let ny = make_int32_range(y);
            let seed = self.seed.wrapping_add(octave as i32);
            let signal = gradient_coherent_noise(nx, ny, seed, self.quality);
            value += (2.0 * signal.abs() - 1.0) * amplitude;

            x *= self.lacunarity;
            y *= self.lacunarity;
            amplitude *= self.persistence;
        }
        value + 0.5
    }
}
