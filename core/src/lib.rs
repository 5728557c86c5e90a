// noisegen: coherent noise, composable noise modules and noise map rendering
pub mod billow2;
pub mod blend2;
pub mod builder;
pub mod config;
pub mod const2;
pub mod error;
pub mod interp;
pub mod model;
pub mod noise_map;
pub mod noisegen;
pub mod perlin2;
pub mod rotate_point2;
pub mod scale_bias2;
pub mod source;
pub mod turbulence2;
pub mod utils;
pub mod voronoi2;

pub use billow2::Billow2D;
pub use blend2::Blend2D;
pub use builder::NoiseMapBuilder;
pub use config::{FractalConfig, MapConfig, TurbulenceConfig, VoronoiConfig};
pub use const2::Const2D;
pub use error::{NoiseError, Result};
pub use model::{Line, Plane};
pub use noise_map::NoiseMap;
pub use noisegen::NoiseQuality;
pub use perlin2::Perlin2D;
pub use rotate_point2::RotatePoint2D;
pub use scale_bias2::ScaleBias2D;
pub use source::SourceModules;
pub use turbulence2::Turbulence2D;
pub use utils::{GradientColor, render_grayscale, render_image};
pub use voronoi2::Voronoi2D;

// A node in a noise module tree.
// Generators have no sources; combinators evaluate their sources and combine the results.
// Evaluation takes &self and has no side effects, so a configured tree can be sampled
// from several threads at once.
pub trait NoiseModule: Sync {
    // Number of source slots this module has
    fn source_module_count(&self) -> usize {
        0
    }

    // Source in slot `index`, None when the slot is unset or out of range
    fn source_module(&self, _index: usize) -> Option<&dyn NoiseModule> {
        None
    }

    // Sample the module at (x, y)
    fn get2(&self, x: f64, y: f64) -> f64;
}
