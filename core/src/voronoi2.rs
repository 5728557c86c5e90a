use crate::NoiseModule;
use crate::error::{Result, check_finite, check_positive};
use crate::noisegen::value_noise;

pub const DEFAULT_VORONOI_DISPLACEMENT: f64 = 1.0;
pub const DEFAULT_VORONOI_FREQUENCY: f64 = 1.0;
pub const DEFAULT_VORONOI_SEED: i32 = 0;

const SQRT_3: f64 = 1.732_050_807_568_877_293_5;

// Voronoi cells. Each unit cell holds one pseudo-random seed point; every input
// takes the constant "elevation" of its nearest seed point, optionally plus the
// distance to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Voronoi2D {
    seed: i32,
    frequency: f64,       // density of the seed points
    displacement: f64,    // scale of the per-cell constant
    enable_distance: bool,
}

impl Default for Voronoi2D {
    fn default() -> Self {
        Self {
            seed: DEFAULT_VORONOI_SEED,
            frequency: DEFAULT_VORONOI_FREQUENCY,
            displacement: DEFAULT_VORONOI_DISPLACEMENT,
            enable_distance: false,
        }
    }
}

impl Voronoi2D {
    pub fn new(seed: i32, frequency: f64, displacement: f64) -> Result<Self> {
        let mut voronoi = Self::default();
        voronoi.set_seed(seed);
        voronoi.set_frequency(frequency)?;
        voronoi.set_displacement(displacement)?;
        Ok(voronoi)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn is_distance_enabled(&self) -> bool {
        self.enable_distance
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.frequency = check_positive("frequency", frequency)?;
        Ok(())
    }

    pub fn set_displacement(&mut self, displacement: f64) -> Result<()> {
        self.displacement = check_finite("displacement", displacement)?;
        Ok(())
    }

    pub fn enable_distance(&mut self, enable: bool) {
        self.enable_distance = enable;
    }

    // Nearest seed point to an already scaled (x, y)
    fn nearest_seed_point(&self, x: f64, y: f64) -> (f64, f64) {
        // Centred on floor, not truncation, so x = 0 and negative integers use their own cell
        let x_int = x.floor() as i32;
        let y_int = y.floor() as i32;

        let mut min_dist = f64::MAX;
        let mut candidate = (0.0, 0.0);

        // A seed point may lie up to one unit outside its own cell, so the
        // nearest one can be two cells away. Scan y outer, x inner: on exact
        // ties the first cell scanned wins.
        for y_cur in y_int.saturating_sub(2)..=y_int.saturating_add(2) {
            for x_cur in x_int.saturating_sub(2)..=x_int.saturating_add(2) {
                let x_pos = x_cur as f64 + value_noise(x_cur, y_cur, self.seed);
                let y_pos = y_cur as f64 + value_noise(x_cur, y_cur, self.seed.wrapping_add(1));
                let x_dist = x_pos - x;
                let y_dist = y_pos - y;
                let dist = x_dist * x_dist + y_dist * y_dist;
                if dist < min_dist {
                    min_dist = dist;
                    candidate = (x_pos, y_pos);
                }
            }
        }
        candidate
    }
}

impl NoiseModule for Voronoi2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;
        let (x_candidate, y_candidate) = self.nearest_seed_point(x, y);

        let value = if self.enable_distance {
            let x_dist = x_candidate - x;
            let y_dist = y_candidate - y;
            (x_dist * x_dist + y_dist * y_dist).sqrt() * SQRT_3 - 1.0
        } else {
            0.0
        };

        // Per-cell constant, keyed by the cell the seed point landed in
        value
            + self.displacement
                * value_noise(x_candidate.floor() as i32, y_candidate.floor() as i32, 0)
    }
}
