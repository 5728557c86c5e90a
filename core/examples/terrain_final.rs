use image::Rgb;
use noisegen::{
    Blend2D, FractalConfig, GradientColor, NoiseMap, NoiseMapBuilder, ScaleBias2D,
    TurbulenceConfig, VoronoiConfig, render_image,
};
use std::path::Path;

// Lambertian shade per cell, light from the north-west at 45°.
// `z_scale` adjusts vertical exaggeration.
fn hillshade(map: &NoiseMap, z_scale: f32) -> Vec<f32> {
    let (w, h) = (map.width() as i32, map.height() as i32);
    let azimuth = std::f32::consts::PI / 4.0;
    let altitude = std::f32::consts::PI / 4.0;
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let (lx, ly, lz) = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    let mut shade = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            // Edge cells read the border value, which only softens the outer ring
            let dzdx = (map.get_value(x + 1, y) - map.get_value(x - 1, y)) / 2.0 * z_scale;
            let dzdy = (map.get_value(x, y + 1) - map.get_value(x, y - 1)) / 2.0 * z_scale;
            let len = (dzdx * dzdx + dzdy * dzdy + 1.0).sqrt();
            let val = ((-dzdx * lx - dzdy * ly + lz) / len).max(0.0);
            shade.push(val);
        }
    }
    shade
}

fn main() {
    let size = 512;
    let seed = 2025;

    // Mountains where the cell control is high, gentle lowlands elsewhere
    let mountains = FractalConfig::continents(seed).perlin().unwrap();
    let lowland_base = FractalConfig::clouds(seed + 1).billow().unwrap();
    let lowlands = ScaleBias2D::new(&lowland_base, 0.2, -0.3).unwrap();
    let control = VoronoiConfig {
        frequency: 0.75,
        ..VoronoiConfig::with_seed(seed + 2)
    }
    .voronoi()
    .unwrap();
    let blend = Blend2D::new(&lowlands, &mountains, &control);
    let terrain = TurbulenceConfig {
        frequency: 2.0,
        power: 0.1,
        ..Default::default()
    }
    .turbulence(&blend)
    .unwrap();

    // Seamless so the image tiles
    let mut map = NoiseMap::new();
    let mut builder = NoiseMapBuilder::new();
    builder.set_source_module(&terrain);
    builder.set_dest_size(size, size).unwrap();
    builder.set_bounds(0.0, 4.0, 0.0, 4.0).unwrap();
    builder.enable_seamless(true);
    builder.set_dest_noise_map(&mut map);
    builder.build().unwrap();
    drop(builder);

    let shade = hillshade(&map, 64.0);
    let mut img = render_image(&map, &GradientColor::terrain());
    for (i, pixel) in img.pixels_mut().enumerate() {
        let light = (shade[i] * 0.5 + 0.5).clamp(0.0, 1.0);
        let Rgb([r, g, b]) = *pixel;
        *pixel = Rgb([
            (r as f32 * light) as u8,
            (g as f32 * light) as u8,
            (b as f32 * light) as u8,
        ]);
    }

    let path = Path::new("terrain_final.png");
    img.save(path).unwrap();
    println!("Saved final terrain image to {:?}", path);
}
