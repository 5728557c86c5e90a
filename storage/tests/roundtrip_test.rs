#[test]
#[ignore = "requires a running MongoDB instance"]
fn test_roundtrip_2d() {
    use noisegen::{MapConfig, NoiseMap, NoiseMapBuilder, VoronoiConfig};
    use storage::NoiseMapStore;
    use storage::models::NoiseMapDoc;
    use tokio::runtime::Builder;

    // Build a single-threaded Tokio runtime
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build Tokio runtime");

    rt.block_on(async {
        // Render a small Voronoi map
        let size = 65;
        let cells = VoronoiConfig::with_seed(42);
        let voronoi = cells.voronoi().expect("valid voronoi config");
        let config = MapConfig {
            width: size,
            height: size,
            seamless: true,
            ..Default::default()
        };
        let mut map = NoiseMap::new();
        let mut builder = NoiseMapBuilder::new();
        builder.set_source_module(&voronoi);
        builder.apply_config(&config).expect("valid map config");
        builder.set_dest_noise_map(&mut map);
        builder.build().expect("build failed");
        drop(builder);

        let doc = NoiseMapDoc::from_noise_map("roundtrip-test", 42, "voronoi2d", config, &map)
            .with_voronoi(cells);

        let storage = NoiseMapStore::init("mongodb://localhost:27017", "noise_db", "noise_maps_test")
            .await
            .expect("storage init failed");

        // Storing twice replaces rather than duplicates
        storage.create(doc.clone()).await.expect("create failed");
        storage.create(doc).await.expect("second create failed");
        let found = storage
            .read_by_seed(42)
            .await
            .expect("read failed")
            .expect("doc not found");
        assert_eq!(found.voronoi, Some(cells));
        assert!(storage.list_names().await.expect("list failed").contains(&"roundtrip-test".to_string()));

        let restored = found.to_noise_map().expect("corrupt document");
        assert_eq!((restored.width(), restored.height()), (size, size));
        let mid = (size / 2) as i32;
        assert_eq!(restored.get_value(mid, mid), map.get_value(mid, mid));

        // Clean up
        let deleted = storage.delete_by_seed(42).await.expect("delete failed");
        assert_eq!(deleted, 1);
    });
}
