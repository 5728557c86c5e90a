use noisegen::{
    Billow2D, NoiseMap, NoiseMapBuilder, NoiseModule, Perlin2D, RotatePoint2D, Turbulence2D,
    Voronoi2D, render_grayscale,
};
use std::path::Path;

fn save_module(module: &dyn NoiseModule, size: usize, filename: &str) {
    let mut map = NoiseMap::new();
    let mut builder = NoiseMapBuilder::new();
    builder.set_source_module(module);
    builder.set_dest_size(size, size).unwrap();
    builder.set_bounds(0.0, 4.0, 0.0, 4.0).unwrap();
    builder.set_dest_noise_map(&mut map);
    builder.build().unwrap();
    drop(builder);

    render_grayscale(&map).save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;

    let perlin = Perlin2D::new(42, 1.0, 0.5, 6).unwrap();
    save_module(&perlin, size, "perlin2d.png");

    let billow = Billow2D::new(42, 1.0, 0.5, 6).unwrap();
    save_module(&billow, size, "billow2d.png");

    let mut voronoi = Voronoi2D::new(42, 2.0, 1.0).unwrap();
    save_module(&voronoi, size, "voronoi2d.png");
    voronoi.enable_distance(true);
    save_module(&voronoi, size, "voronoi2d_distance.png");

    // Rotated and warped Perlin
    let mut rotated = RotatePoint2D::new(&perlin);
    rotated.set_z_angle(45.0).unwrap();
    let mut turbulence = Turbulence2D::new(&rotated);
    turbulence.set_power(0.125).unwrap();
    turbulence.set_frequency(4.0).unwrap();
    save_module(&turbulence, size, "turbulence2d.png");
}
