use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    config::{EngineConfig, MissingComponentPolicy},
    error::{EngineError, EngineResult},
    modules::{
        bottleneck::identify_bottlenecks,
        builtin::builtin_catalog,
        catalog::Catalog,
        compatibility::{CompatibilityReport, GameProfile},
        fps::{lookup, GamingProfile},
        pairing::{Pairing, PairingAnalysis},
        recommend::generate_recommendations,
        resolve,
        score::overall_score,
    },
    schemas::{
        computing::{Category, Component, ComponentId, Score, Tier},
        report::{ComponentMatch, Components, PerformanceReport, PerformanceTier},
    },
};

/// A build as the user typed it: one free-text label per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcSpecs {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
}

impl PcSpecs {
    pub fn new(cpu: &str, gpu: &str, ram: &str, storage: &str) -> Self {
        Self {
            cpu: cpu.to_string(),
            gpu: gpu.to_string(),
            ram: ram.to_string(),
            storage: storage.to_string(),
        }
    }

    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
        }
    }

    /// Categories left blank.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| self.get(*category).trim().is_empty())
            .collect()
    }
}

/// Pairing balance reported when neither CPU nor GPU was given.
const NEUTRAL_SCORE: Score = 50;

/// The performance estimation engine.
///
/// Holds nothing but the catalog and its configuration, both immutable, so
/// one engine can be shared between threads.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            catalog: builtin_catalog(),
            config: EngineConfig::default(),
        }
    }
}

impl Engine {
    /// # Errors
    /// Errors if the configuration or the catalog fail validation.
    pub fn new(catalog: Catalog, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog: catalog.validated()?,
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn find_match(&self, category: Category, input: &str) -> ComponentMatch {
        resolve::find_match(&self.catalog, category, input)
    }

    /// Resolve every category of `specs`, applying the missing-component policy to blank ones.
    fn resolve_specs(&self, specs: &PcSpecs) -> EngineResult<Components> {
        let missing = specs.missing();
        if self.config.missing == MissingComponentPolicy::Reject && !missing.is_empty() {
            return Err(EngineError::PartialSpec(missing));
        }
        Ok(Category::ALL
            .iter()
            .filter(|category| {
                self.config.missing != MissingComponentPolicy::Omit || !missing.contains(category)
            })
            .map(|category| (*category, self.find_match(*category, specs.get(*category))))
            .collect())
    }

    /// Grade a whole build.
    ///
    /// # Errors
    /// Only errors under [`MissingComponentPolicy::Reject`], when a label is blank.
    #[instrument(level = "debug", skip(self))]
    pub fn analyze_build(&self, specs: &PcSpecs) -> EngineResult<PerformanceReport> {
        let components = self.resolve_specs(specs)?;
        let thresholds = &self.config.thresholds;

        let overall_score = overall_score(
            &self.config.weights,
            components.iter().map(|(category, part)| (*category, part.score)),
        );
        let (cpu_tier, gpu_tier) = (
            tier_or_neutral(&components, Category::Cpu),
            tier_or_neutral(&components, Category::Gpu),
        );
        let pairing = match (components.get(&Category::Cpu), components.get(&Category::Gpu)) {
            (Some(cpu), Some(gpu)) => Pairing::new(cpu.score, gpu.score, thresholds),
            (Some(part), None) | (None, Some(part)) => Pairing::unpaired(part.score),
            (None, None) => Pairing::unpaired(NEUTRAL_SCORE),
        };
        let bottlenecks = identify_bottlenecks(&components, thresholds);
        let recommendations = generate_recommendations(&components, &pairing, thresholds);

        info!(
            overall_score,
            bottlenecks = bottlenecks.len(),
            recommendations = recommendations.len(),
            "analyzed build"
        );
        Ok(PerformanceReport {
            overall_score,
            performance_tier: PerformanceTier::from_score(overall_score),
            fps_estimates: lookup(cpu_tier, gpu_tier).to_map(),
            bottlenecks,
            pairing,
            recommendations,
            components,
        })
    }

    pub fn list_components(&self, category: Category, limit: usize) -> &[Component] {
        self.catalog.list(category, limit)
    }

    pub fn search_components(&self, category: Category, query: &str) -> Vec<&Component> {
        self.catalog.search(category, query)
    }

    pub fn component_details(&self, category: Category, query: &str) -> Option<&Component> {
        self.catalog.find_by_name_substring(category, query)
    }

    pub fn component_by_id(&self, id: &ComponentId) -> Option<(Category, &Component)> {
        self.catalog.get(id)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn analyze_pairing(&self, cpu: &str, gpu: &str) -> PairingAnalysis {
        PairingAnalysis::new(
            self.find_match(Category::Cpu, cpu),
            self.find_match(Category::Gpu, gpu),
            &self.config.thresholds,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub fn gaming_profile(&self, cpu: &str, gpu: &str, resolution: Option<&str>) -> GamingProfile {
        GamingProfile::new(
            self.find_match(Category::Cpu, cpu).tier,
            self.find_match(Category::Gpu, gpu).tier,
            resolution,
        )
    }

    /// Check a build against the estimated requirements of a game released
    /// before `current_year`.
    ///
    /// # Errors
    /// Errors if the cpu, gpu or ram label is blank. Storage may be left out.
    #[instrument(level = "debug", skip(self, game), fields(game = %game.name))]
    pub fn check_compatibility(
        &self,
        game: &GameProfile,
        specs: &PcSpecs,
        current_year: i32,
    ) -> EngineResult<CompatibilityReport> {
        let missing = specs.missing();
        let components: Components = Category::ALL
            .iter()
            .filter(|category| !missing.contains(category))
            .map(|category| (*category, self.find_match(*category, specs.get(*category))))
            .collect();
        let report =
            CompatibilityReport::new(game, &components, &self.config.weights, current_year)?;
        info!(verdict = %report.compatibility, "checked compatibility");
        Ok(report)
    }
}

/// The FPS table needs both tiers; a part that was left out reads as mid-range.
fn tier_or_neutral(components: &Components, category: Category) -> Tier {
    components.get(&category).map_or(Tier::Mid, |part| part.tier)
}
