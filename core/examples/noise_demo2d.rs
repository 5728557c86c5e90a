use noisegen::{NoiseMapBuilder, Perlin2D, Turbulence2D};

fn main() {
    // 6-octave Perlin, warped by default turbulence
    let perlin = Perlin2D::new(2025, 2.0, 0.5, 6).unwrap();
    let mut turbulence = Turbulence2D::new(&perlin);
    turbulence.set_power(0.25).unwrap();

    let mut builder = NoiseMapBuilder::new();
    builder.set_source_module(&turbulence);
    builder.set_dest_size(16, 16).unwrap();
    builder.set_bounds(0.0, 2.0, 0.0, 2.0).unwrap();

    // Stream the 16×16 window straight to stdout
    builder
        .build_with(|col, _row, value| {
            print!("{:>6.3} ", value);
            if col == 15 {
                println!();
            }
        })
        .unwrap();
}
