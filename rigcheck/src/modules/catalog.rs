use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use rigcheck_core::{modules::builtin::builtin_catalog, Catalog, Category, Component};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::common::Client;

/// A source of catalog entries, one category at a time.
#[async_trait]
pub trait ComponentProducer: Send + Sync {
    async fn produce(&self, category: Category) -> anyhow::Result<Vec<Component>>;
}

/// The reference tables compiled into the engine.
#[derive(Default)]
pub struct BuiltinProducer {
    catalog: OnceCell<Catalog>,
}

#[async_trait]
impl ComponentProducer for BuiltinProducer {
    async fn produce(&self, category: Category) -> anyhow::Result<Vec<Component>> {
        let catalog = self
            .catalog
            .get_or_init(|| async { builtin_catalog() })
            .await;
        Ok(catalog.components(category).to_vec())
    }
}

/// A `{"cpu": [...], "gpu": [...], "ram": [...], "storage": [...]}` document on disk.
/// The file is read once, on the first category asked for.
pub struct JsonFileProducer {
    path: PathBuf,
    catalog: OnceCell<Catalog>,
}

impl JsonFileProducer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            catalog: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ComponentProducer for JsonFileProducer {
    async fn produce(&self, category: Category) -> anyhow::Result<Vec<Component>> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                debug!(path = %self.path.display(), "reading catalog file");
                let text = tokio::fs::read_to_string(&self.path)
                    .await
                    .with_context(|| format!("reading {}", self.path.display()))?;
                let catalog: Catalog = serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", self.path.display()))?;
                Ok::<_, anyhow::Error>(catalog)
            })
            .await?;
        Ok(catalog.components(category).to_vec())
    }
}

/// An HTTP service answering `GET {base_url}/{category}` with a JSON array of components.
pub struct HttpProducer {
    client: Client<false>,
    base_url: String,
}

impl HttpProducer {
    pub fn new(client: Client<false>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.as_str())
    }
}

#[async_trait]
impl ComponentProducer for HttpProducer {
    async fn produce(&self, category: Category) -> anyhow::Result<Vec<Component>> {
        let url = self.url(category);
        debug!(%url, "fetching catalog category");
        let res = self
            .client
            .0
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("fetching {}", url))?;
        Ok(res.json().await?)
    }
}

/// Fetch all four categories concurrently and assemble a validated [`Catalog`].
pub async fn load_catalog(producer: &dyn ComponentProducer) -> anyhow::Result<Catalog> {
    let (cpu, gpu, ram, storage) = futures::try_join!(
        producer.produce(Category::Cpu),
        producer.produce(Category::Gpu),
        producer.produce(Category::Ram),
        producer.produce(Category::Storage),
    )?;
    let catalog = Catalog::default()
        .with_category(Category::Cpu, cpu)
        .with_category(Category::Gpu, gpu)
        .with_category(Category::Ram, ram)
        .with_category(Category::Storage, storage)
        .validated()
        .context("validating the loaded catalog")?;
    info!(components = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rigcheck_core::{modules::builtin::builtin_catalog, Category};

    use super::{load_catalog, BuiltinProducer, ComponentProducer, HttpProducer, JsonFileProducer};

    #[tokio::test]
    async fn test_builtin_producer() {
        let catalog = load_catalog(&BuiltinProducer::default()).await.unwrap();
        assert_eq!(catalog, builtin_catalog());
    }

    #[tokio::test]
    async fn test_json_file_producer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "cpu": [ {{ "name": "AMD Ryzen 5 5600X", "score": 75, "tier": "mid", "passmark_score": "19,321" }} ],
                "storage": [ {{ "name": "WD Blue 1TB HDD", "score": 15, "tier": "low" }} ]
            }}"#
        )
        .unwrap();

        let producer = JsonFileProducer::new(file.path());
        let gpus = producer.produce(Category::Gpu).await.unwrap();
        assert!(gpus.is_empty());

        let catalog = load_catalog(&producer).await.unwrap();
        assert_eq!(catalog.len(), 2);
        let cpu = &catalog.components(Category::Cpu)[0];
        assert_eq!(cpu.passmark_score, Some(19321));
        assert_eq!(cpu.id.as_str(), "amd-ryzen-5-5600x");
    }

    #[tokio::test]
    async fn test_json_file_producer_rejects_bad_scores() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "gpu": [ {{ "name": "NVIDIA RTX 4090", "score": 140, "tier": "high" }} ] }}"#
        )
        .unwrap();
        assert!(load_catalog(&JsonFileProducer::new(file.path())).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let producer = JsonFileProducer::new("/nonexistent/rigcheck/catalog.json");
        let err = producer.produce(Category::Cpu).await.unwrap_err();
        assert!(format!("{:#}", err).contains("reading /nonexistent/rigcheck/catalog.json"));
    }

    #[test]
    fn test_http_urls() {
        let producer = HttpProducer::new(Default::default(), "https://catalog.example.com/v1/");
        assert_eq!(
            producer.url(Category::Storage),
            "https://catalog.example.com/v1/storage"
        );
    }
}
