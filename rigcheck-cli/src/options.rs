use std::path::PathBuf;

use anyhow::Context as _;
use clap::AppSettings;
use rigcheck::{
    common::Client,
    modules::catalog::{load_catalog, BuiltinProducer, HttpProducer, JsonFileProducer},
    rigcheck_core::{Catalog, Engine, EngineConfig, MissingComponentPolicy},
};
use structopt::StructOpt;
use tracing::info;

use crate::{
    common::{Context, Run},
    modules::{
        analyze::{Analyze, Pairing, Profile},
        components::Components,
        games::Games,
    },
    run_impl,
};

#[derive(StructOpt)]
#[structopt(
    name = "rigcheck-cli",
    global_settings = &[AppSettings::ColoredHelp, AppSettings::VersionlessSubcommands]
)]
pub struct Options {
    /// Engine configuration (weights, thresholds, missing-component policy) as JSON.
    #[structopt(long, env = "RIGCHECK_CONFIG", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Override the configured missing-component policy: default, omit or reject.
    #[structopt(long, env = "RIGCHECK_MISSING")]
    missing: Option<MissingComponentPolicy>,
    /// Catalog JSON file to use instead of the built-in tables.
    #[structopt(long, env = "RIGCHECK_CATALOG", parse(from_os_str))]
    catalog: Option<PathBuf>,
    /// Catalog service answering `GET <url>/<category>`.
    #[structopt(long, env = "RIGCHECK_CATALOG_URL", conflicts_with = "catalog")]
    catalog_url: Option<String>,
    #[structopt(long, env = "RAWG_API_KEY", hide_env_values = true)]
    rawg_key: Option<String>,
    #[structopt(subcommand)]
    pub command: Command,
}

impl Options {
    async fn config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                EngineConfig::from_json_str(&text)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => EngineConfig::default(),
        };
        if let Some(missing) = self.missing {
            config.missing = missing;
        }
        Ok(config)
    }

    async fn catalog(&self, client: &Client<false>) -> anyhow::Result<Catalog> {
        match (&self.catalog, &self.catalog_url) {
            (Some(path), _) => load_catalog(&JsonFileProducer::new(path)).await,
            (None, Some(url)) => load_catalog(&HttpProducer::new(client.clone(), url)).await,
            (None, None) => load_catalog(&BuiltinProducer::default()).await,
        }
    }

    pub async fn context(&self) -> anyhow::Result<Context> {
        let client = Client::new()?;
        let config = self.config().await?;
        let catalog = self.catalog(&client).await?;
        info!(missing = %config.missing, components = catalog.len(), "engine ready");
        Ok(Context {
            engine: Engine::new(catalog, config)?,
            client,
            rawg_key: self.rawg_key.clone(),
        })
    }
}

#[derive(StructOpt)]
pub enum Command {
    /// Full performance report of a build.
    Analyze(Analyze),
    /// Browse the component catalog.
    Components(Components),
    /// Balance between a CPU and a GPU.
    Pairing(Pairing),
    /// FPS outlook of a CPU and GPU combination.
    Profile(Profile),
    /// Browse the RAWG games catalog.
    Games(Games),
}

run_impl!(Command, self, ctx, ser, {
    match self {
        Self::Analyze(a) => a.run(ctx, ser).await?,
        Self::Components(c) => c.run(ctx, ser).await?,
        Self::Pairing(p) => p.run(ctx, ser).await?,
        Self::Profile(p) => p.run(ctx, ser).await?,
        Self::Games(g) => g.run(ctx, ser).await?,
    }
});

#[cfg(test)]
mod tests {
    use erased_serde::Serializer;
    use rigcheck::rigcheck_core::MissingComponentPolicy;
    use structopt::StructOpt;

    use super::{Command, Options};
    use crate::common::Run;

    async fn run(args: &[&str]) -> anyhow::Result<serde_json::Value> {
        let opt = Options::from_iter_safe(std::iter::once("rigcheck-cli").chain(args.iter().copied()))?;
        let ctx = opt.context().await?;
        let mut out = Vec::new();
        opt.command
            .run(&ctx, &mut <dyn Serializer>::erase(&mut serde_json::Serializer::new(&mut out)))
            .await?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_parse() {
        let opt = Options::from_iter_safe(&[
            "rigcheck-cli",
            "--missing",
            "omit",
            "pairing",
            "Intel Core i5-12400F",
            "NVIDIA RTX 3060",
        ])
        .unwrap();
        assert_eq!(opt.missing, Some(MissingComponentPolicy::Omit));
        assert!(matches!(opt.command, Command::Pairing(_)));

        assert!(Options::from_iter_safe(&["rigcheck-cli", "--missing", "sometimes", "analyze"]).is_err());
        assert!(Options::from_iter_safe(&["rigcheck-cli", "components", "list", "psu"]).is_err());
    }

    #[tokio::test]
    async fn test_analyze() {
        let report = run(&[
            "analyze",
            "--cpu",
            "Intel Core i9-13900K",
            "--gpu",
            "NVIDIA RTX 4090",
            "--ram",
            "32GB DDR5-6000",
            "--storage",
            "NVMe SSD",
        ])
        .await
        .unwrap();
        assert_eq!(report["overallScore"], 95);
    }

    #[tokio::test]
    async fn test_reject_policy_surfaces_as_error() {
        let err = run(&["--missing", "reject", "analyze", "--cpu", "Intel Core i9-13900K"])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing required components"));
    }

    #[tokio::test]
    async fn test_components() {
        let list = run(&["components", "list", "gpu", "--limit", "3"]).await.unwrap();
        assert_eq!(list.as_array().unwrap().len(), 3);

        let everything = run(&["components", "list", "cpu"]).await.unwrap();
        let names: Vec<_> = everything
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 15);
        assert!(names.iter().any(|n| n == "Intel Core i9-13900K"));

        let details = run(&["components", "details", "storage", "nothing like this"])
            .await
            .unwrap();
        assert!(details.is_null());
    }
}
