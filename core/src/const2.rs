use crate::NoiseModule;

pub const DEFAULT_CONST_VALUE: f64 = 0.0;

// Outputs the same value everywhere; mostly useful as a fixed control or bias source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Const2D {
    value: f64,
}

impl Default for Const2D {
    fn default() -> Self {
        Self::new(DEFAULT_CONST_VALUE)
    }
}

impl Const2D {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl NoiseModule for Const2D {
    fn get2(&self, _x: f64, _y: f64) -> f64 {
        self.value
    }
}
