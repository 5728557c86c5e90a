use crate::NoiseModule;

// Models map a simpler parameter space onto module input coordinates.

// Flat plane: (x, z) on the plane is (x, y) for the module.
// The noise map builder renders through this.
#[derive(Clone, Copy)]
pub struct Plane<'a> {
    module: &'a dyn NoiseModule,
}

impl<'a> Plane<'a> {
    pub fn new(module: &'a dyn NoiseModule) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &'a dyn NoiseModule {
        self.module
    }

    pub fn set_module(&mut self, module: &'a dyn NoiseModule) {
        self.module = module;
    }

    #[inline]
    pub fn get_value(&self, x: f64, z: f64) -> f64 {
        self.module.get2(x, z)
    }
}

// Line segment between two points in module space, sampled by a parameter p in [0, 1].
// With attenuation on, the output fades to zero at both ends (scaled by 4p(1-p)).
#[derive(Clone, Copy)]
pub struct Line<'a> {
    module: &'a dyn NoiseModule,
    attenuate: bool,
    start: (f64, f64),
    end: (f64, f64),
}

impl<'a> Line<'a> {
    pub fn new(module: &'a dyn NoiseModule) -> Self {
        Self {
            module,
            attenuate: true,
            start: (0.0, 0.0),
            end: (1.0, 1.0),
        }
    }

    pub fn module(&self) -> &'a dyn NoiseModule {
        self.module
    }

    pub fn set_module(&mut self, module: &'a dyn NoiseModule) {
        self.module = module;
    }

    pub fn attenuate(&self) -> bool {
        self.attenuate
    }

    pub fn set_attenuate(&mut self, attenuate: bool) {
        self.attenuate = attenuate;
    }

    pub fn set_start_point(&mut self, x: f64, y: f64) {
        self.start = (x, y);
    }

    pub fn set_end_point(&mut self, x: f64, y: f64) {
        self.end = (x, y);
    }

    pub fn get_value(&self, p: f64) -> f64 {
        let x = (self.end.0 - self.start.0) * p + self.start.0;
        let y = (self.end.1 - self.start.1) * p + self.start.1;
        let value = self.module.get2(x, y);
        if self.attenuate {
            p * (1.0 - p) * 4.0 * value
        } else {
            value
        }
    }
}
