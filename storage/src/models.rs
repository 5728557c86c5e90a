use bson::oid::ObjectId;
use noisegen::{FractalConfig, MapConfig, NoiseMap, VoronoiConfig};
use serde::{Deserialize, Serialize};

use crate::{Result, StoreError};

// A rendered noise map plus the parameters that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseMapDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub seed: i64,
    pub generator: String, // e.g. "perlin2d", "voronoi2d", "blend2d"
    #[serde(default)]
    pub fractal: Option<FractalConfig>,
    #[serde(default)]
    pub voronoi: Option<VoronoiConfig>,
    pub map: MapConfig,
    pub width: u32,
    pub height: u32,
    // Row-major without stride padding: length = width×height
    pub values: Vec<f32>,
}

impl NoiseMapDoc {
    pub fn from_noise_map(
        name: impl Into<String>,
        seed: i64,
        generator: impl Into<String>,
        map: MapConfig,
        noise_map: &NoiseMap,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            seed,
            generator: generator.into(),
            fractal: None,
            voronoi: None,
            map,
            width: noise_map.width() as u32,
            height: noise_map.height() as u32,
            values: noise_map.iter_values().collect(),
        }
    }

    pub fn with_fractal(mut self, fractal: FractalConfig) -> Self {
        self.fractal = Some(fractal);
        self
    }

    pub fn with_voronoi(mut self, voronoi: VoronoiConfig) -> Self {
        self.voronoi = Some(voronoi);
        self
    }

    // Rebuilds the noise map; fails if the value count doesn't match the dimensions
    pub fn to_noise_map(&self) -> Result<NoiseMap> {
        let (width, height) = (self.width as usize, self.height as usize);
        if self.values.len() != width * height {
            return Err(StoreError::CorruptDocument(format!(
                "'{}' holds {} values for a {}x{} map",
                self.name,
                self.values.len(),
                width,
                height
            )));
        }

        let mut map = NoiseMap::with_size(width, height)?;
        for (row, chunk) in self.values.chunks_exact(width.max(1)).enumerate() {
            if let Some(slab) = map.slab_mut(row) {
                slab.copy_from_slice(chunk);
            }
        }
        Ok(map)
    }
}
