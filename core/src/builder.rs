use crate::NoiseModule;
use crate::config::{MapConfig, check_bounds, check_dest_size};
use crate::error::{NoiseError, Result};
use crate::interp::linear;
use crate::model::Plane;
use crate::noise_map::NoiseMap;

// Evaluates a module tree over a rectangular window of the (x, z) plane and writes one
// value per cell, either into a noise map or into a caller supplied sink.
//
// In seamless mode every cell blends four evaluations: the cell itself and the same cell
// shifted by the window extent on x, on z, and on both. The far edges of the raster then
// fade into the near edges, so copies of the raster tile without visible seams.
pub struct NoiseMapBuilder<'a> {
    source: Option<&'a dyn NoiseModule>,
    dest: Option<&'a mut NoiseMap>,
    width: usize,
    height: usize,
    lower_x: f64,
    upper_x: f64,
    lower_z: f64,
    upper_z: f64,
    seamless: bool,
}

impl<'a> Default for NoiseMapBuilder<'a> {
    fn default() -> Self {
        let window = MapConfig::default();
        Self {
            source: None,
            dest: None,
            width: 0,
            height: 0,
            lower_x: window.lower_x,
            upper_x: window.upper_x,
            lower_z: window.lower_z,
            upper_z: window.upper_z,
            seamless: false,
        }
    }
}

impl<'a> NoiseMapBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source_module(&mut self, module: &'a dyn NoiseModule) {
        self.source = Some(module);
    }

    pub fn source_module(&self) -> Option<&'a dyn NoiseModule> {
        self.source
    }

    pub fn set_dest_noise_map(&mut self, dest: &'a mut NoiseMap) {
        self.dest = Some(dest);
    }

    pub fn dest_noise_map(&self) -> Option<&NoiseMap> {
        self.dest.as_deref()
    }

    pub fn set_dest_size(&mut self, width: usize, height: usize) -> Result<()> {
        check_dest_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn dest_width(&self) -> usize {
        self.width
    }

    pub fn dest_height(&self) -> usize {
        self.height
    }

    pub fn set_bounds(&mut self, lower_x: f64, upper_x: f64, lower_z: f64, upper_z: f64) -> Result<()> {
        check_bounds(lower_x, upper_x, lower_z, upper_z)?;
        self.lower_x = lower_x;
        self.upper_x = upper_x;
        self.lower_z = lower_z;
        self.upper_z = upper_z;
        Ok(())
    }

    // (lower_x, upper_x, lower_z, upper_z)
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.lower_x, self.upper_x, self.lower_z, self.upper_z)
    }

    pub fn enable_seamless(&mut self, enable: bool) {
        self.seamless = enable;
    }

    pub fn is_seamless_enabled(&self) -> bool {
        self.seamless
    }

    // Applies window, size and seamless flag at once; nothing changes if the config is invalid
    pub fn apply_config(&mut self, config: &MapConfig) -> Result<()> {
        config.validate()?;
        self.set_bounds(config.lower_x, config.upper_x, config.lower_z, config.upper_z)?;
        self.set_dest_size(config.width, config.height)?;
        self.enable_seamless(config.seamless);
        Ok(())
    }

    // Fills the destination noise map, resizing it to the destination size
    pub fn build(&mut self) -> Result<()> {
        let pass = self.prepare()?;
        let dest = self
            .dest
            .as_deref_mut()
            .ok_or_else(|| NoiseError::InvalidParam("destination noise map is not set".into()))?;
        dest.set_size(pass.width, pass.height)?;

        for row in 0..pass.height {
            let z = pass.z_at(row);
            if let Some(slab) = dest.slab_mut(row) {
                for (col, cell) in slab.iter_mut().enumerate() {
                    *cell = pass.value_at(pass.x_at(col), z);
                }
            }
        }
        Ok(())
    }

    // Streams every cell as (column, row, value) in row-major order.
    // No destination noise map is needed.
    pub fn build_with<F>(&self, mut sink: F) -> Result<()>
    where
        F: FnMut(usize, usize, f32),
    {
        let pass = self.prepare()?;
        for row in 0..pass.height {
            let z = pass.z_at(row);
            for col in 0..pass.width {
                sink(col, row, pass.value_at(pass.x_at(col), z));
            }
        }
        Ok(())
    }

    // Validates everything a pass needs before any output is touched
    fn prepare(&self) -> Result<BuildPass<'a>> {
        let source = self
            .source
            .ok_or_else(|| NoiseError::InvalidParam("source module is not set".into()))?;
        check_dest_size(self.width, self.height)?;
        check_bounds(self.lower_x, self.upper_x, self.lower_z, self.upper_z)?;

        log::debug!(
            "building {}x{} noise map over [{}, {}] x [{}, {}], seamless: {}",
            self.width,
            self.height,
            self.lower_x,
            self.upper_x,
            self.lower_z,
            self.upper_z,
            self.seamless
        );

        let extent_x = self.upper_x - self.lower_x;
        let extent_z = self.upper_z - self.lower_z;
        Ok(BuildPass {
            plane: Plane::new(source),
            width: self.width,
            height: self.height,
            lower_x: self.lower_x,
            lower_z: self.lower_z,
            extent_x,
            extent_z,
            delta_x: extent_x / self.width as f64,
            delta_z: extent_z / self.height as f64,
            seamless: self.seamless,
        })
    }
}

// Snapshot of one build: copied settings, so the loops never borrow the builder
struct BuildPass<'a> {
    plane: Plane<'a>,
    width: usize,
    height: usize,
    lower_x: f64,
    lower_z: f64,
    extent_x: f64,
    extent_z: f64,
    delta_x: f64,
    delta_z: f64,
    seamless: bool,
}

impl BuildPass<'_> {
    // Multiplying instead of accumulating keeps every coordinate free of drift
    fn x_at(&self, col: usize) -> f64 {
        self.lower_x + col as f64 * self.delta_x
    }

    fn z_at(&self, row: usize) -> f64 {
        self.lower_z + row as f64 * self.delta_z
    }

    fn value_at(&self, x: f64, z: f64) -> f32 {
        if !self.seamless {
            return self.plane.get_value(x, z) as f32;
        }

        let sw = self.plane.get_value(x, z);
        let se = self.plane.get_value(x + self.extent_x, z);
        let nw = self.plane.get_value(x, z + self.extent_z);
        let ne = self.plane.get_value(x + self.extent_x, z + self.extent_z);
        // Weight 1 at the lower bound picks the shifted sample, weight 0 at the upper bound
        // picks the unshifted one, so both edges agree.
        let x_blend = 1.0 - (x - self.lower_x) / self.extent_x;
        let z_blend = 1.0 - (z - self.lower_z) / self.extent_z;
        let south = linear(sw, se, x_blend);
        let north = linear(nw, ne, x_blend);
        linear(south, north, z_blend) as f32
    }
}
