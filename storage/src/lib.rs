// storage keeps rendered noise maps in MongoDB

pub mod models;

use crate::models::NoiseMapDoc;
use bson::doc;
use futures_util::stream::TryStreamExt;
use mongodb::{Client, Collection, IndexModel, options::ClientOptions};
use noisegen::NoiseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error("corrupt document: {0}")]
    CorruptDocument(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub struct NoiseMapStore {
    col: Collection<NoiseMapDoc>,
}

impl NoiseMapStore {
    // Connects and makes sure the (name, seed) index exists
    pub async fn init(uri: &str, db_name: &str, col_name: &str) -> Result<Self> {
        let mut opts = ClientOptions::parse(uri).await?;
        opts.app_name = Some("NoiseGenStorage".to_string());
        let client = Client::with_options(opts)?;
        let col = client.database(db_name).collection(col_name);

        let index_model = IndexModel::builder()
            .keys(doc! { "name": 1, "seed": 1 })
            .build();
        col.create_index(index_model).await?;

        Ok(Self { col })
    }

    pub async fn list_names(&self) -> Result<Vec<String>> {
        let mut cursor = self.col.find(doc! {}).await?;
        let mut names = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            names.push(doc.name);
        }
        Ok(names)
    }

    // Inserts a noise map, replacing any stored map with the same name and seed
    pub async fn create(&self, doc_obj: NoiseMapDoc) -> Result<()> {
        let filter = doc! { "name": &doc_obj.name, "seed": doc_obj.seed };
        let replaced = self.col.delete_many(filter).await?.deleted_count;
        log::info!(
            "storing noise map '{}' (seed {}, {}x{}), replaced {}",
            doc_obj.name,
            doc_obj.seed,
            doc_obj.width,
            doc_obj.height,
            replaced
        );
        self.col.insert_one(doc_obj).await?;
        Ok(())
    }

    pub async fn read_by_name(&self, name: &str) -> Result<Option<NoiseMapDoc>> {
        Ok(self.col.find_one(doc! { "name": name }).await?)
    }

    pub async fn read_by_seed(&self, seed: i64) -> Result<Option<NoiseMapDoc>> {
        Ok(self.col.find_one(doc! { "seed": seed }).await?)
    }

    // Delete by seed (for clean-up); returns how many maps were removed
    pub async fn delete_by_seed(&self, seed: i64) -> Result<u64> {
        let deleted = self.col.delete_many(doc! { "seed": seed }).await?.deleted_count;
        log::info!("deleted {} noise map(s) with seed {}", deleted, seed);
        Ok(deleted)
    }
}
