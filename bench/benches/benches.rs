use criterion::{Criterion, criterion_group, criterion_main};
use noisegen::noisegen::gradient_coherent_noise;
use noisegen::{
    Billow2D, Blend2D, NoiseMap, NoiseMapBuilder, NoiseModule, NoiseQuality, Perlin2D,
    Turbulence2D, Voronoi2D,
};
use std::hint::black_box;

const SIZE: usize = 256;
const SEED: i32 = 2025;

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    for quality in [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best] {
        group.bench_function(format!("gradient_coherent_noise {quality:?}"), |b| {
            b.iter(|| gradient_coherent_noise(black_box(12.34), black_box(-5.67), SEED, quality))
        });
    }
    group.finish();
}

fn bench_modules(c: &mut Criterion) {
    let perlin = Perlin2D::new(SEED, 4.0, 0.5, 6).unwrap();
    let billow = Billow2D::new(SEED, 4.0, 0.5, 6).unwrap();
    let voronoi = Voronoi2D::new(SEED, 4.0, 1.0).unwrap();
    let turbulence = Turbulence2D::new(&perlin);
    let modules: [(&str, &dyn NoiseModule); 4] = [
        ("Perlin2D", &perlin),
        ("Billow2D", &billow),
        ("Voronoi2D", &voronoi),
        ("Turbulence2D", &turbulence),
    ];

    let mut group = c.benchmark_group("modules");
    for (name, module) in modules {
        group.bench_function(name, |b| {
            b.iter(|| module.get2(black_box(0.123), black_box(4.567)))
        });
    }
    group.finish();
}

fn bench_builder(c: &mut Criterion) {
    let hills = Perlin2D::new(SEED, 4.0, 0.5, 4).unwrap();
    let plains = Billow2D::new(SEED + 1, 2.0, 0.5, 4).unwrap();
    let control = Voronoi2D::new(SEED + 2, 2.0, 1.0).unwrap();
    let blend = Blend2D::new(&hills, &plains, &control);
    let mut map = NoiseMap::with_size(SIZE, SIZE).unwrap();

    let mut group = c.benchmark_group("builder");
    for seamless in [false, true] {
        let name = if seamless { "blend tree 256² seamless" } else { "blend tree 256²" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut builder = NoiseMapBuilder::new();
                builder.set_source_module(&blend);
                builder.set_dest_size(SIZE, SIZE).unwrap();
                builder.set_bounds(0.0, 4.0, 0.0, 4.0).unwrap();
                builder.enable_seamless(seamless);
                builder.set_dest_noise_map(&mut map);
                builder.build().unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(noise_benchmarks, bench_kernel, bench_modules, bench_builder);
criterion_main!(noise_benchmarks);
