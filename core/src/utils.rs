use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{LinSrgb, Mix};

use crate::error::{NoiseError, Result};
use crate::noise_map::NoiseMap;

// Maps noise values to colours through sorted gradient stops.
// Values outside the end stops take the colour of the nearest end.
#[derive(Debug, Clone, Default)]
pub struct GradientColor {
    points: Vec<(f64, LinSrgb)>,
}

fn rgb8(r: u8, g: u8, b: u8) -> LinSrgb {
    LinSrgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

impl GradientColor {
    pub fn new() -> Self {
        Self::default()
    }

    // Black at -1 to white at +1
    pub fn grayscale() -> Self {
        Self {
            points: vec![(-1.0, rgb8(0, 0, 0)), (1.0, rgb8(255, 255, 255))],
        }
    }

    // Water, sand, grass, rock, snow over [-1, 1]
    pub fn terrain() -> Self {
        Self {
            points: vec![
                (-1.00, rgb8(0, 0, 128)),     // deep water
                (-0.42, rgb8(0, 128, 255)),   // shallows
                (-0.40, rgb8(194, 178, 128)), // sand
                (-0.22, rgb8(220, 200, 160)),
                (-0.20, rgb8(34, 139, 34)), // grass
                (0.18, rgb8(50, 205, 50)),
                (0.20, rgb8(128, 128, 128)), // rock
                (0.58, rgb8(192, 192, 192)),
                (0.60, rgb8(220, 220, 220)), // snow
                (1.00, rgb8(255, 255, 255)),
            ],
        }
    }

    // Inserts a stop, keeping the stops sorted by position
    pub fn add_gradient_point(&mut self, position: f64, color: LinSrgb) -> Result<()> {
        if !position.is_finite() {
            return Err(NoiseError::InvalidParam(format!(
                "gradient position must be finite, got {position}"
            )));
        }
        let index = self.points.partition_point(|&(p, _)| p < position);
        if self.points.get(index).is_some_and(|&(p, _)| p == position) {
            return Err(NoiseError::InvalidParam(format!(
                "gradient already has a stop at {position}"
            )));
        }
        self.points.insert(index, (position, color));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[(f64, LinSrgb)] {
        &self.points
    }

    // Panics with fewer than two stops
    pub fn get_color(&self, position: f64) -> LinSrgb {
        assert!(
            self.points.len() >= 2,
            "GradientColor: need at least two stops, have {}",
            self.points.len()
        );

        // First stop strictly above position, clamped to the ends
        let last = self.points.len() - 1;
        let above = self.points.partition_point(|&(p, _)| p <= position);
        let i1 = above.min(last);
        let i0 = above.saturating_sub(1).min(last);
        if i0 == i1 {
            return self.points[i0].1;
        }

        let (p0, c0) = self.points[i0];
        let (p1, c1) = self.points[i1];
        let alpha = (position - p0) / (p1 - p0);
        c0.mix(&c1, alpha as f32)
    }
}

// Colours every cell of the map through the gradient
pub fn render_image(map: &NoiseMap, gradient: &GradientColor) -> RgbImage {
    let mut img = RgbImage::new(map.width() as u32, map.height() as u32);
    for row in 0..map.height() {
        let Some(slab) = map.slab(row) else { continue };
        for (col, &value) in slab.iter().enumerate() {
            let rgb = gradient.get_color(value as f64).into_format::<u8>();
            img.put_pixel(col as u32, row as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }
    img
}

// [-1, 1] to 0..=255, clamped
pub fn render_grayscale(map: &NoiseMap) -> GrayImage {
    let mut img = GrayImage::new(map.width() as u32, map.height() as u32);
    for row in 0..map.height() {
        let Some(slab) = map.slab(row) else { continue };
        for (col, &value) in slab.iter().enumerate() {
            let level = ((value.clamp(-1.0, 1.0) + 1.0) * 127.5).round() as u8;
            img.put_pixel(col as u32, row as u32, Luma([level]));
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: LinSrgb, b: LinSrgb) -> bool {
        (a.red - b.red).abs() < 1e-6 && (a.green - b.green).abs() < 1e-6 && (a.blue - b.blue).abs() < 1e-6
    }

    #[test]
    fn stops_stay_sorted_and_duplicates_are_rejected() {
        let mut gradient = GradientColor::new();
        gradient.add_gradient_point(0.5, rgb8(0, 255, 0)).unwrap();
        gradient.add_gradient_point(-1.0, rgb8(0, 0, 0)).unwrap();
        gradient.add_gradient_point(1.0, rgb8(255, 255, 255)).unwrap();
        let positions: Vec<f64> = gradient.points().iter().map(|&(p, _)| p).collect();
        assert_eq!(positions, vec![-1.0, 0.5, 1.0]);

        let err = gradient.add_gradient_point(0.5, rgb8(1, 2, 3)).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidParam(_)));
        assert!(gradient.add_gradient_point(f64::NAN, rgb8(1, 2, 3)).is_err());
        assert_eq!(gradient.points().len(), 3);
    }

    #[test]
    fn colors_clamp_at_the_ends_and_mix_between() {
        let gradient = GradientColor::grayscale();
        assert!(close(gradient.get_color(-5.0), rgb8(0, 0, 0)));
        assert!(close(gradient.get_color(5.0), rgb8(255, 255, 255)));
        assert!(close(gradient.get_color(1.0), rgb8(255, 255, 255)));
        assert!(close(gradient.get_color(0.0), LinSrgb::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn stop_positions_return_their_own_color() {
        let gradient = GradientColor::terrain();
        for &(position, color) in gradient.points() {
            assert!(close(gradient.get_color(position), color));
        }
    }

    #[test]
    #[should_panic(expected = "at least two stops")]
    fn single_stop_gradient_panics() {
        let mut gradient = GradientColor::new();
        gradient.add_gradient_point(0.0, rgb8(1, 1, 1)).unwrap();
        gradient.get_color(0.0);
    }

    #[test]
    fn rendering_matches_map_dimensions() {
        let mut map = NoiseMap::with_size(6, 3).unwrap();
        map.clear(-1.0);
        map.set_value(5, 2, 1.0);
        map.set_value(0, 1, 3.0);

        let gray = render_grayscale(&map);
        assert_eq!(gray.dimensions(), (6, 3));
        assert_eq!(gray.get_pixel(0, 0).0, [0]);
        assert_eq!(gray.get_pixel(5, 2).0, [255]);
        assert_eq!(gray.get_pixel(0, 1).0, [255]);

        let rgb = render_image(&map, &GradientColor::terrain());
        assert_eq!(rgb.dimensions(), (6, 3));
        let deep = rgb.get_pixel(0, 0).0;
        assert_eq!(&deep[..2], &[0, 0]);
        assert!(deep[2].abs_diff(128) <= 1);
        assert_eq!(rgb.get_pixel(5, 2).0, [255, 255, 255]);
    }
}
