use crate::NoiseModule;
use crate::error::{NoiseError, Result, check_finite, check_positive};
use crate::noisegen::{NoiseQuality, gradient_coherent_noise, make_int32_range};

pub const DEFAULT_PERLIN_FREQUENCY: f64 = 1.0;
pub const DEFAULT_PERLIN_LACUNARITY: f64 = 2.0;
pub const DEFAULT_PERLIN_OCTAVE_COUNT: usize = 6;
pub const DEFAULT_PERLIN_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_PERLIN_QUALITY: NoiseQuality = NoiseQuality::Standard;
pub const DEFAULT_PERLIN_SEED: i32 = 0;

// Every octave consumes one more seed and one more doubling of the coordinates,
// past this the integer lattice stops being meaningful
pub const PERLIN_MAX_OCTAVE: usize = 30;

pub(crate) fn check_octave_count(octave_count: usize) -> Result<usize> {
    if (1..=PERLIN_MAX_OCTAVE).contains(&octave_count) {
        Ok(octave_count)
    } else {
        Err(NoiseError::InvalidParam(format!(
            "octave count must be in 1..={PERLIN_MAX_OCTAVE}, got {octave_count}"
        )))
    }
}

// 2D Perlin noise: a sum of gradient coherent noise octaves (fractal Brownian motion)
#[derive(Debug, Clone, PartialEq)]
pub struct Perlin2D {
    seed: i32,             // seed of the first octave, octave n uses seed + n
    frequency: f64,        // Controls the "zoom level" of the noise pattern
    lacunarity: f64,       // Frequency multiplier between octaves
    persistence: f64,      // Amplitude multiplier between octaves, usually in (0, 1)
    octave_count: usize,   // number of octaves to sum
    quality: NoiseQuality, // curve used inside each lattice cell
}

impl Default for Perlin2D {
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

impl Perlin2D {
    pub fn new(seed: i32, frequency: f64, persistence: f64, octave_count: usize) -> Result<Self> {
        let mut perlin = Self::default();
        perlin.set_seed(seed);
        perlin.set_frequency(frequency)?;
        perlin.set_persistence(persistence)?;
        perlin.set_octave_count(octave_count)?;
        Ok(perlin)
    }

    // Default module with a different frequency and octave count, for callers
    // that hold values already known to be valid
    pub(crate) fn with_frequency_and_octaves(frequency: f64, octave_count: usize) -> Self {
        debug_assert!(frequency.is_finite() && frequency > 0.0);
        debug_assert!((1..=PERLIN_MAX_OCTAVE).contains(&octave_count));
        Self {
            frequency,
            octave_count,
            ..Self::default()
        }
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

    // For best results use a value between 1.5 and 3.5
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<()> {
        self.lacunarity = check_positive("lacunarity", lacunarity)?;
        Ok(())
    }

    // Only finiteness is enforced; values outside (0, 1) are allowed but rarely useful
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

impl NoiseModule for Perlin2D {
    // Unbounded in theory, roughly [-1, 1] for persistence below 1
    fn get2(&self, x: f64, y: f64) -> f64 {
        debug_assert!(self.octave_count >= 1);
        let mut value = 0.0; // Accumulated noise value
        let mut amplitude = 1.0; // Weight of the current octave
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;

        for octave in 0..self.octave_count {
            // Keep the coordinates convertible to i32 for the kernel
            let nx = make_int32_range(x);
            let ny = make_int32_range(y);
            let seed = self.seed.wrapping_add(octave as i32);
            let signal = gradient_coherent_noise(nx, ny, seed, self.quality);
            value += signal * amplitude;

            x *= self.lacunarity;
            y *= self.lacunarity;
            amplitude *= self.persistence;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::NoiseModule;
    use crate::error::NoiseError;
    use crate::noisegen::NoiseQuality;

    use super::Perlin2D;

    #[test]
    fn perlin2_determinism() {
        let p1 = Perlin2D::new(1234, 0.01, 0.5, 4).unwrap();
        let p2 = Perlin2D::new(1234, 0.01, 0.5, 4).unwrap();
        // Same seed + params ⇒ same output
        let a = p1.get2(10.5, -3.7);
        let b = p2.get2(10.5, -3.7);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn perlin2_golden_value() {
        let mut p = Perlin2D::new(0, 1.0, 0.5, 1).unwrap();
        p.set_quality(NoiseQuality::Standard);
        let v = p.get2(0.5, 0.5);
        assert!((v - 0.10355339059327373).abs() < 1e-12, "got {v}");
    }

    #[test]
    // Each octave is within [-1, 1], so the sum is bounded by the summed amplitudes
    fn perlin2_range() {
        let p = Perlin2D::new(0, 0.1, 0.5, 6).unwrap();
        let bound: f64 = (0..6).map(|o| 0.5f64.powi(o)).sum();
        for &pt in &[(0.0, 0.0), (5.3, -1.2), (100.1, 200.2), (-3.0e9, 7.0e12)] {
            let v = p.get2(pt.0, pt.1);
            assert!(v.abs() <= bound, "got {v}");
        }
    }

    #[test]
    fn perlin2_default_spans_roughly_unit_range() {
        let p = Perlin2D::default();
        let (mut lo, mut hi) = (f64::MAX, f64::MIN);
        for i in 0..150 {
            for j in 0..150 {
                let v = p.get2(i as f64 * 0.0531, j as f64 * 0.0473 - 2.0);
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        assert!(lo < -0.8 && hi > 0.8, "range [{lo}, {hi}]");
    }

    #[test]
    fn perlin2_seed_changes_output() {
        let a = Perlin2D::new(1, 1.0, 0.5, 3).unwrap();
        let b = Perlin2D::new(2, 1.0, 0.5, 3).unwrap();
        let differs = (0..32).any(|i| {
            let x = i as f64 * 0.37 + 0.11;
            a.get2(x, 0.5) != b.get2(x, 0.5)
        });
        assert!(differs);
    }

    #[test]
    fn perlin2_best_quality_is_smoother_across_lattice_lines() {
        // Second differences across x = 1.0; Fast creases there, Best does not
        let max_second_difference = |quality| {
            let mut p = Perlin2D::new(7, 1.0, 0.5, 1).unwrap();
            p.set_quality(quality);
            let h = 1e-3;
            (-20..=20)
                .map(|i| {
                    let x = 1.0 + i as f64 * h;
                    let f = |t: f64| p.get2(t, 0.3);
                    (f(x + h) - 2.0 * f(x) + f(x - h)).abs()
                })
                .fold(0.0, f64::max)
        };
        let fast = max_second_difference(NoiseQuality::Fast);
        let best = max_second_difference(NoiseQuality::Best);
        assert!(best < fast, "best {best} fast {fast}");
    }

    #[test]
    fn perlin2_rejects_invalid_parameters() {
        let mut p = Perlin2D::default();
        assert!(matches!(p.set_frequency(0.0), Err(NoiseError::InvalidParam(_))));
        assert!(matches!(p.set_lacunarity(-2.0), Err(NoiseError::InvalidParam(_))));
        assert!(matches!(p.set_octave_count(0), Err(NoiseError::InvalidParam(_))));
        assert!(matches!(p.set_octave_count(31), Err(NoiseError::InvalidParam(_))));
        assert!(matches!(p.set_persistence(f64::NAN), Err(NoiseError::InvalidParam(_))));
        // Failed setters leave the module untouched
        assert_eq!(p, Perlin2D::default());
        p.set_octave_count(30).unwrap();
        p.set_persistence(1.5).unwrap();
        assert_eq!(p.octave_count(), 30);
    }
}
