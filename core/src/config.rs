use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};
use crate::noise_map::{RASTER_MAX_HEIGHT, RASTER_MAX_WIDTH};
use crate::perlin2::{
    DEFAULT_PERLIN_FREQUENCY, DEFAULT_PERLIN_LACUNARITY, DEFAULT_PERLIN_OCTAVE_COUNT,
    DEFAULT_PERLIN_PERSISTENCE, DEFAULT_PERLIN_SEED,
};
use crate::turbulence2::{
    DEFAULT_TURBULENCE_FREQUENCY, DEFAULT_TURBULENCE_POWER, DEFAULT_TURBULENCE_ROUGHNESS,
    DEFAULT_TURBULENCE_SEED,
};
use crate::voronoi2::{DEFAULT_VORONOI_DISPLACEMENT, DEFAULT_VORONOI_FREQUENCY, DEFAULT_VORONOI_SEED};
use crate::{Billow2D, NoiseModule, NoiseQuality, Perlin2D, Turbulence2D, Voronoi2D};

// Parameters shared by the octave-summing generators (Perlin and Billow).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub frequency: f64,
    // Frequency multiplier between octaves.
    pub lacunarity: f64,
    // Amplitude multiplier between octaves.
    pub persistence: f64,
    pub octave_count: usize,
    pub seed: i32,
    pub quality: NoiseQuality,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_PERLIN_FREQUENCY,
            lacunarity: DEFAULT_PERLIN_LACUNARITY,
            persistence: DEFAULT_PERLIN_PERSISTENCE,
            octave_count: DEFAULT_PERLIN_OCTAVE_COUNT,
            seed: DEFAULT_PERLIN_SEED,
            quality: NoiseQuality::default(),
        }
    }
}

impl FractalConfig {
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    // Broad continents with plenty of fine detail.
    pub fn continents(seed: i32) -> Self {
        Self {
            frequency: 0.5,
            lacunarity: 2.2,
            persistence: 0.55,
            octave_count: 8,
            seed,
            quality: NoiseQuality::Best,
        }
    }

    // Few octaves, soft rolling shapes. Works well with Billow for clouds.
    pub fn clouds(seed: i32) -> Self {
        Self {
            frequency: 2.0,
            lacunarity: 2.0,
            persistence: 0.4,
            octave_count: 4,
            seed,
            quality: NoiseQuality::Standard,
        }
    }

    pub fn perlin(&self) -> Result<Perlin2D> {
        let mut perlin = Perlin2D::new(self.seed, self.frequency, self.persistence, self.octave_count)?;
        perlin.set_lacunarity(self.lacunarity)?;
        perlin.set_quality(self.quality);
        Ok(perlin)
    }

    pub fn billow(&self) -> Result<Billow2D> {
        let mut billow = Billow2D::new(self.seed, self.frequency, self.persistence, self.octave_count)?;
        billow.set_lacunarity(self.lacunarity)?;
        billow.set_quality(self.quality);
        Ok(billow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    pub frequency: f64,
    pub displacement: f64,
    pub seed: i32,
    pub enable_distance: bool,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_VORONOI_FREQUENCY,
            displacement: DEFAULT_VORONOI_DISPLACEMENT,
            seed: DEFAULT_VORONOI_SEED,
            enable_distance: false,
        }
    }
}

impl VoronoiConfig {
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn voronoi(&self) -> Result<Voronoi2D> {
        let mut voronoi = Voronoi2D::new(self.seed, self.frequency, self.displacement)?;
        voronoi.enable_distance(self.enable_distance);
        Ok(voronoi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbulenceConfig {
    pub frequency: f64,
    pub power: f64,
    pub roughness: usize,
    pub seed: i32,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_TURBULENCE_FREQUENCY,
            power: DEFAULT_TURBULENCE_POWER,
            roughness: DEFAULT_TURBULENCE_ROUGHNESS,
            seed: DEFAULT_TURBULENCE_SEED,
        }
    }
}

impl TurbulenceConfig {
    pub fn turbulence<'a>(&self, source: &'a dyn NoiseModule) -> Result<Turbulence2D<'a>> {
        let mut turbulence = Turbulence2D::new(source);
        turbulence.set_frequency(self.frequency)?;
        turbulence.set_power(self.power)?;
        turbulence.set_roughness(self.roughness)?;
        turbulence.set_seed(self.seed);
        Ok(turbulence)
    }
}

// Coordinate window and raster size for a noise map build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub lower_x: f64,
    pub upper_x: f64,
    pub lower_z: f64,
    pub upper_z: f64,
    pub width: usize,
    pub height: usize,
    pub seamless: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            lower_x: 0.0,
            upper_x: 1.0,
            lower_z: 0.0,
            upper_z: 1.0,
            width: 256,
            height: 256,
            seamless: false,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<()> {
        check_bounds(self.lower_x, self.upper_x, self.lower_z, self.upper_z)?;
        check_dest_size(self.width, self.height)
    }
}

pub(crate) fn check_bounds(lower_x: f64, upper_x: f64, lower_z: f64, upper_z: f64) -> Result<()> {
    let finite = [lower_x, upper_x, lower_z, upper_z].iter().all(|v| v.is_finite());
    if !finite || lower_x >= upper_x || lower_z >= upper_z {
        return Err(NoiseError::InvalidParam(format!(
            "bounds [{lower_x}, {upper_x}] x [{lower_z}, {upper_z}] must be finite with lower < upper"
        )));
    }
    Ok(())
}

pub(crate) fn check_dest_size(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > RASTER_MAX_WIDTH || height > RASTER_MAX_HEIGHT {
        return Err(NoiseError::InvalidParam(format!(
            "destination size {width}x{height} must be within 1..={RASTER_MAX_WIDTH} x 1..={RASTER_MAX_HEIGHT}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Const2D;

    #[test]
    fn fractal_config_builds_matching_modules() {
        let config = FractalConfig::continents(42);
        let perlin = config.perlin().unwrap();
        assert_eq!(perlin.seed(), 42);
        assert_eq!(perlin.octave_count(), 8);
        assert_eq!(perlin.lacunarity(), 2.2);
        assert_eq!(perlin.quality(), NoiseQuality::Best);

        let billow = config.billow().unwrap();
        assert_eq!(billow.persistence(), 0.55);
        assert_eq!(billow.frequency(), 0.5);
    }

    #[test]
    fn default_fractal_config_matches_default_perlin() {
        let from_config = FractalConfig::default().perlin().unwrap();
        let direct = Perlin2D::default();
        for i in 0..16 {
            let (x, y) = (i as f64 * 0.37, i as f64 * -0.91);
            assert_eq!(from_config.get2(x, y), direct.get2(x, y));
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let bad_octaves = FractalConfig {
            octave_count: 0,
            ..Default::default()
        };
        assert!(bad_octaves.perlin().is_err());

        let bad_frequency = VoronoiConfig {
            frequency: -1.0,
            ..Default::default()
        };
        assert!(bad_frequency.voronoi().is_err());

        let source = Const2D::new(0.0);
        let bad_roughness = TurbulenceConfig {
            roughness: 0,
            ..Default::default()
        };
        assert!(bad_roughness.turbulence(&source).is_err());
    }

    #[test]
    fn turbulence_config_applies_every_field() {
        let source = Const2D::new(0.0);
        let config = TurbulenceConfig {
            frequency: 4.0,
            power: 0.125,
            roughness: 5,
            seed: 9,
        };
        let turbulence = config.turbulence(&source).unwrap();
        assert_eq!(turbulence.frequency(), 4.0);
        assert_eq!(turbulence.power(), 0.125);
        assert_eq!(turbulence.roughness(), 5);
        assert_eq!(turbulence.seed(), 9);
    }

    #[test]
    fn map_config_validation() {
        assert!(MapConfig::default().validate().is_ok());
        let inverted = MapConfig {
            lower_x: 2.0,
            upper_x: 1.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
        let degenerate = MapConfig {
            lower_z: 1.0,
            upper_z: 1.0,
            ..Default::default()
        };
        assert!(degenerate.validate().is_err());
        let empty = MapConfig {
            height: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_err());
        let huge = MapConfig {
            width: RASTER_MAX_WIDTH + 1,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
    }
}
