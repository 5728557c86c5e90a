use crate::NoiseModule;
use crate::error::{Result, check_finite};
use crate::source::SourceModules;

pub const DEFAULT_ROTATE_X: f64 = 0.0;
pub const DEFAULT_ROTATE_Y: f64 = 0.0;
pub const DEFAULT_ROTATE_Z: f64 = 0.0;

// Rotates the input coordinates around the origin before sampling the source module.
// The angles are Euler angles in degrees. The full 3x3 matrix is kept so that the
// same angles give the same rotation as a 3D pipeline; only the x and y rows are used here.
pub struct RotatePoint2D<'a> {
    sources: SourceModules<'a, 1>,
    x_angle: f64,
    y_angle: f64,
    z_angle: f64,
    matrix: [[f64; 3]; 3],
}

impl<'a> Default for RotatePoint2D<'a> {
    fn default() -> Self {
        let mut module = Self {
            sources: SourceModules::new(),
            x_angle: DEFAULT_ROTATE_X,
            y_angle: DEFAULT_ROTATE_Y,
            z_angle: DEFAULT_ROTATE_Z,
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        };
        module.update_matrix();
        module
    }
}

impl<'a> RotatePoint2D<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            sources: SourceModules::from_modules([source]),
            ..Self::default()
        }
    }

    pub fn set_source_module(&mut self, index: usize, module: &'a dyn NoiseModule) -> Result<()> {
        self.sources.set(index, module)
    }

    pub fn x_angle(&self) -> f64 {
        self.x_angle
    }

    pub fn y_angle(&self) -> f64 {
        self.y_angle
    }

    pub fn z_angle(&self) -> f64 {
        self.z_angle
    }

    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.matrix
    }

    // Sets all three angles (degrees) and rebuilds the rotation matrix
    pub fn set_angles(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) -> Result<()> {
        check_finite("x angle", x_angle)?;
        check_finite("y angle", y_angle)?;
        check_finite("z angle", z_angle)?;
        self.x_angle = x_angle;
        self.y_angle = y_angle;
        self.z_angle = z_angle;
        self.update_matrix();
        Ok(())
    }

    pub fn set_x_angle(&mut self, x_angle: f64) -> Result<()> {
        self.set_angles(x_angle, self.y_angle, self.z_angle)
    }

    pub fn set_y_angle(&mut self, y_angle: f64) -> Result<()> {
        self.set_angles(self.x_angle, y_angle, self.z_angle)
    }

    pub fn set_z_angle(&mut self, z_angle: f64) -> Result<()> {
        self.set_angles(self.x_angle, self.y_angle, z_angle)
    }

    fn update_matrix(&mut self) {
        let (x_sin, x_cos) = self.x_angle.to_radians().sin_cos();
        let (y_sin, y_cos) = self.y_angle.to_radians().sin_cos();
        let (z_sin, z_cos) = self.z_angle.to_radians().sin_cos();

        self.matrix = [
            [
                y_sin * x_sin * z_sin + y_cos * z_cos,
                x_cos * z_sin,
                y_sin * z_cos - y_cos * x_sin * z_sin,
            ],
            [
                y_sin * x_sin * z_cos - y_cos * z_sin,
                x_cos * z_cos,
                -y_cos * x_sin * z_cos - y_sin * z_sin,
            ],
            [-y_sin * x_cos, x_sin, y_cos * x_cos],
        ];
    }
}

impl NoiseModule for RotatePoint2D<'_> {
    fn source_module_count(&self) -> usize {
        self.sources.len()
    }

    fn source_module(&self, index: usize) -> Option<&dyn NoiseModule> {
        self.sources.get(index)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        let source = self.sources.require(0, "RotatePoint2D");
        // First two rows only; the z row has nothing to act on in 2D
        let nx = self.matrix[0][0] * x + self.matrix[0][1] * y;
        let ny = self.matrix[1][0] * x + self.matrix[1][1] * y;
        source.get2(nx, ny)
    }
}
