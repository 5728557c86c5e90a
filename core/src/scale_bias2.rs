use crate::NoiseModule;
use crate::error::{Result, check_finite};
use crate::source::SourceModules;

pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_BIAS: f64 = 0.0;

// Applies value * scale + bias to the output of its source module
pub struct ScaleBias2D<'a> {
    sources: SourceModules<'a, 1>,
    scale: f64,
    bias: f64,
}

impl<'a> Default for ScaleBias2D<'a> {
    fn default() -> Self {
        Self {
            sources: SourceModules::new(),
            scale: DEFAULT_SCALE,
            bias: DEFAULT_BIAS,
        }
    }
}

impl<'a> ScaleBias2D<'a> {
    pub fn new(source: &'a dyn NoiseModule, scale: f64, bias: f64) -> Result<Self> {
        let mut module = Self::default();
        module.set_source_module(0, source)?;
        module.set_scale(scale)?;
        module.set_bias(bias)?;
        Ok(module)
    }

    pub fn set_source_module(&mut self, index: usize, module: &'a dyn NoiseModule) -> Result<()> {
        self.sources.set(index, module)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.scale = check_finite("scale", scale)?;
        Ok(())
    }

    pub fn set_bias(&mut self, bias: f64) -> Result<()> {
        self.bias = check_finite("bias", bias)?;
        Ok(())
    }
}

impl NoiseModule for ScaleBias2D<'_> {
    fn source_module_count(&self) -> usize {
        self.sources.len()
    }

    fn source_module(&self, index: usize) -> Option<&dyn NoiseModule> {
        self.sources.get(index)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        self.sources.require(0, "ScaleBias2D").get2(x, y) * self.scale + self.bias
    }
}
