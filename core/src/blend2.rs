use crate::NoiseModule;
use crate::error::Result;
use crate::interp::linear;
use crate::source::SourceModules;

// Blends two source modules, weighted by a third (the control module).
// Source 0 wins where the control outputs -1, source 1 where it outputs +1.
#[derive(Default)]
pub struct Blend2D<'a> {
    sources: SourceModules<'a, 3>,
}

impl<'a> Blend2D<'a> {
    pub fn new(
        source0: &'a dyn NoiseModule,
        source1: &'a dyn NoiseModule,
        control: &'a dyn NoiseModule,
    ) -> Self {
        Self {
            sources: SourceModules::from_modules([source0, source1, control]),
        }
    }

    pub fn set_source_module(&mut self, index: usize, module: &'a dyn NoiseModule) -> Result<()> {
        self.sources.set(index, module)
    }

    // Same as set_source_module(2, module)
    pub fn set_control_module(&mut self, module: &'a dyn NoiseModule) -> Result<()> {
        self.sources.set(2, module)
    }

    pub fn control_module(&self) -> Option<&'a dyn NoiseModule> {
        self.sources.get(2)
    }
}

impl NoiseModule for Blend2D<'_> {
    fn source_module_count(&self) -> usize {
        self.sources.len()
    }

    fn source_module(&self, index: usize) -> Option<&dyn NoiseModule> {
        self.sources.get(index)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        let v0 = self.sources.require(0, "Blend2D").get2(x, y);
        let v1 = self.sources.require(1, "Blend2D").get2(x, y);
        // Control output remapped from [-1, 1] to [0, 1]
        let alpha = (self.sources.require(2, "Blend2D").get2(x, y) + 1.0) / 2.0;
        linear(v0, v1, alpha)
    }
}
