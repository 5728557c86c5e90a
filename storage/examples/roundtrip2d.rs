use noisegen::{FractalConfig, MapConfig, NoiseMap, NoiseMapBuilder};
use storage::NoiseMapStore;
use storage::models::NoiseMapDoc;

#[tokio::main]
async fn main() -> storage::Result<()> {
    // Render a 257×257 Perlin map
    let fractal = FractalConfig::continents(2025);
    let perlin = fractal.perlin()?;
    let config = MapConfig {
        upper_x: 4.0,
        upper_z: 4.0,
        width: 257,
        height: 257,
        ..Default::default()
    };
    let mut map = NoiseMap::new();
    let mut builder = NoiseMapBuilder::new();
    builder.set_source_module(&perlin);
    builder.apply_config(&config)?;
    builder.set_dest_noise_map(&mut map);
    builder.build()?;
    drop(builder);

    let doc = NoiseMapDoc::from_noise_map("continents", 2025, "perlin2d", config, &map)
        .with_fractal(fractal);

    // Init storage
    let storage = NoiseMapStore::init("mongodb://localhost:27017", "noise_db", "noise_maps").await?;

    // Insert & read back
    storage.create(doc).await?;
    if let Some(found) = storage.read_by_seed(2025).await? {
        let restored = found.to_noise_map()?;
        println!(
            "Round-trip success: sample [128,128] = {}",
            restored.get_value(128, 128)
        );
    } else {
        println!("Document not found!");
    }

    // Clean up
    storage.delete_by_seed(2025).await?;

    Ok(())
}
