use crate::error::{Result, check_finite};
use crate::source::SourceModules;
use crate::{NoiseModule, Perlin2D};

pub const DEFAULT_TURBULENCE_FREQUENCY: f64 = 1.0;
pub const DEFAULT_TURBULENCE_POWER: f64 = 1.0;
pub const DEFAULT_TURBULENCE_ROUGHNESS: usize = 3;
pub const DEFAULT_TURBULENCE_SEED: i32 = 0;

// Offsets added before sampling the distortion modules. Coherent noise is zero on
// integer lattice points, so without them the warp would vanish along lattice lines.
// They differ per axis so the two displacements don't cross zero together.
const X_DISTORT_OFFSET: (f64, f64) = (12414.0 / 65536.0, 65124.0 / 65536.0);
const Y_DISTORT_OFFSET: (f64, f64) = (26519.0 / 65536.0, 18128.0 / 65536.0);

// Domain warp: displaces the input coordinates with two Perlin modules, then samples
// the source module at the displaced position.
// The distortion modules always share frequency and roughness; the y module uses seed + 1.
pub struct Turbulence2D<'a> {
    sources: SourceModules<'a, 1>,
    x_distort: Perlin2D,
    y_distort: Perlin2D,
    power: f64, // scale of the displacement
}

impl<'a> Default for Turbulence2D<'a> {
    fn default() -> Self {
        let distortion = Perlin2D::with_frequency_and_octaves(
            DEFAULT_TURBULENCE_FREQUENCY,
            DEFAULT_TURBULENCE_ROUGHNESS,
        );
        let mut turbulence = Self {
            sources: SourceModules::new(),
            x_distort: distortion.clone(),
            y_distort: distortion,
            power: DEFAULT_TURBULENCE_POWER,
        };
        turbulence.set_seed(DEFAULT_TURBULENCE_SEED);
        turbulence
    }
}

impl<'a> Turbulence2D<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            sources: SourceModules::from_modules([source]),
            ..Self::default()
        }
    }

    pub fn set_source_module(&mut self, index: usize, module: &'a dyn NoiseModule) -> Result<()> {
        self.sources.set(index, module)
    }

    // Both distortion modules hold the same frequency, either one answers
    pub fn frequency(&self) -> f64 {
        self.x_distort.frequency()
    }

    pub fn seed(&self) -> i32 {
        self.x_distort.seed()
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    // Octave count of the distortion modules
    pub fn roughness(&self) -> usize {
        self.x_distort.octave_count()
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.apply_to_distortion(|p| p.set_frequency(frequency))
    }

    pub fn set_power(&mut self, power: f64) -> Result<()> {
        self.power = check_finite("power", power)?;
        Ok(())
    }

    pub fn set_roughness(&mut self, roughness: usize) -> Result<()> {
        self.apply_to_distortion(|p| p.set_octave_count(roughness))
    }

    // Distinct seeds per axis avoid correlated displacement
    pub fn set_seed(&mut self, seed: i32) {
        self.x_distort.set_seed(seed);
        self.y_distort.set_seed(seed.wrapping_add(1));
    }

    // Applies a setter to both distortion modules. The x module validates first,
    // so on error neither module has changed.
    fn apply_to_distortion(&mut self, set: impl Fn(&mut Perlin2D) -> Result<()>) -> Result<()> {
        set(&mut self.x_distort)?;
        set(&mut self.y_distort)
    }
}

impl NoiseModule for Turbulence2D<'_> {
    fn source_module_count(&self) -> usize {
        self.sources.len()
    }

    fn source_module(&self, index: usize) -> Option<&dyn NoiseModule> {
        self.sources.get(index)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        let source = self.sources.require(0, "Turbulence2D");

        let dx = self
            .x_distort
            .get2(x + X_DISTORT_OFFSET.0, y + X_DISTORT_OFFSET.1);
        let dy = self
            .y_distort
            .get2(x + Y_DISTORT_OFFSET.0, y + Y_DISTORT_OFFSET.1);

        let warped_x = x + dx * self.power;
        let warped_y = y + dy * self.power;

        source.get2(warped_x, warped_y)
    }
}
