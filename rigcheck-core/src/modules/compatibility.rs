//! Whether a build can run a given game.
//!
//! Game catalogs carry no hardware requirements, so they are estimated from
//! the game's rating, age and playtime, on the same 0-100 scale as component
//! scores.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_with::SerializeDisplay;

use crate::{
    common::round_half_up,
    config::Weights,
    error::{EngineError, EngineResult},
    modules::{bottleneck::below_ratio, resolve::category_default},
    schemas::{
        computing::{Category, Score},
        report::Components,
    },
};

/// The few facts about a game the requirement estimate needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile {
    pub name: String,
    /// Average user rating, 0 to 5.
    pub rating: f64,
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Average hours played.
    #[serde(default)]
    pub playtime: Option<u32>,
}

const REQUIREMENT_CAP: f64 = 90.0;
const MAX_POPULARITY_BONUS: f64 = 15.0;
const UNKNOWN_POPULARITY_BONUS: f64 = 10.0;

/// Per-category score a build needs, at minimum and recommended level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequirementLevel {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
    pub storage: f64,
}

impl RequirementLevel {
    fn scaled(score: f64, factors: [f64; 4]) -> Self {
        Self {
            cpu: score * factors[0],
            gpu: score * factors[1],
            ram: score * factors[2],
            storage: score * factors[3],
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Cpu => self.cpu,
            Category::Gpu => self.gpu,
            Category::Ram => self.ram,
            Category::Storage => self.storage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameRequirements {
    pub score: f64,
    pub min: RequirementLevel,
    pub rec: RequirementLevel,
}

impl GameRequirements {
    /// `min(90, rating * 10 + age bonus + popularity bonus)`, where the age
    /// bonus is two points per year since release and the popularity bonus
    /// is a tenth of the playtime, capped at 15 (10 when playtime is unknown).
    pub fn estimate(game: &GameProfile, current_year: i32) -> Self {
        let base = game.rating * 10.0;
        let year_bonus = game
            .release_year
            .map(|year| f64::from((current_year - year) * 2).max(0.0))
            .unwrap_or(0.0);
        let popularity_bonus = match game.playtime {
            Some(hours) if hours > 0 => (f64::from(hours) / 10.0).min(MAX_POPULARITY_BONUS),
            _ => UNKNOWN_POPULARITY_BONUS,
        };
        let score = (base + year_bonus + popularity_bonus).min(REQUIREMENT_CAP);
        Self {
            score,
            min: RequirementLevel::scaled(score, [0.7, 0.7, 0.5, 0.3]),
            rec: RequirementLevel::scaled(score, [1.0, 1.0, 0.8, 0.5]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub user: Score,
    pub required: f64,
    pub min: f64,
    pub meets_min: bool,
    pub meets_rec: bool,
}

impl Comparison {
    fn new(user: Score, requirements: &GameRequirements, category: Category) -> Self {
        let min = requirements.min.get(category);
        let required = requirements.rec.get(category);
        let user_score = f64::from(user);
        Self {
            user,
            required,
            min,
            meets_min: user_score >= min,
            meets_rec: user_score >= required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay)]
pub enum Verdict {
    Perfect,
    Good,
    CpuLimited,
    GpuLimited,
    Insufficient,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Your PC exceeds or meets recommended requirements! You can run this game at high/ultra settings.",
            Self::Good => "Your PC meets minimum requirements. Game should run at medium settings.",
            Self::CpuLimited => "Your CPU may struggle. Consider lowering settings or upgrading CPU.",
            Self::GpuLimited => "Your GPU may struggle. Lower graphics settings for better performance.",
            Self::Insufficient => "Your PC does not meet minimum requirements. Game may not run well.",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Perfect => "Perfect",
                Self::Good => "Good",
                Self::CpuLimited => "CPU Limited",
                Self::GpuLimited => "GPU Limited",
                Self::Insufficient => "Insufficient",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentStatus {
    Excellent,
    Good,
    Weak,
}

impl From<&Comparison> for ComponentStatus {
    fn from(comparison: &Comparison) -> Self {
        if comparison.meets_rec {
            Self::Excellent
        } else if comparison.meets_min {
            Self::Good
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnalysis {
    pub name: Category,
    pub user_score: Score,
    pub min_req: f64,
    pub rec_req: f64,
    pub user_component: String,
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub game: String,
    pub compatibility: Verdict,
    pub message: &'static str,
    pub system_score: Score,
    pub game_req_score: Score,
    pub difference: i32,
    #[serde(rename = "estimatedFPS")]
    pub estimated_fps: &'static str,
    pub settings: &'static str,
    pub resolution: &'static str,
    pub component_analysis: Vec<ComponentAnalysis>,
    pub bottlenecks: Vec<String>,
    pub meets_minimum: bool,
    pub cpu_comparison: Comparison,
    pub gpu_comparison: Comparison,
}

/// Frame-rate outlook and settings for a weighted system score.
fn fps_outlook(system_score: f64) -> (&'static str, &'static str) {
    match system_score {
        s if s >= 85.0 => ("100+ FPS", "Ultra/High"),
        s if s >= 70.0 => ("60-100 FPS", "High"),
        s if s >= 50.0 => ("40-60 FPS", "Medium"),
        s if s >= 35.0 => ("25-40 FPS", "Low"),
        _ => ("<25 FPS", "Low (Unplayable)"),
    }
}

fn resolution_band(system_score: f64) -> &'static str {
    match system_score {
        s if s >= 80.0 => "1440p/4K",
        s if s >= 60.0 => "1080p/1440p",
        _ => "1080p",
    }
}

const CPU_GPU_IMBALANCE: f64 = 0.7;

impl CompatibilityReport {
    /// Compare resolved components against the estimated requirements of `game`.
    ///
    /// # Errors
    /// Errors with [`EngineError::PartialSpec`] if the cpu, gpu or ram is missing.
    /// Storage is optional and compares at its category default when absent.
    pub fn new(
        game: &GameProfile,
        components: &Components,
        weights: &Weights,
        current_year: i32,
    ) -> EngineResult<Self> {
        let missing: Vec<Category> = [Category::Cpu, Category::Gpu, Category::Ram]
            .into_iter()
            .filter(|category| !components.contains_key(category))
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::PartialSpec(missing));
        }

        let requirements = GameRequirements::estimate(game, current_year);
        let compare = |category: Category| {
            let user = components
                .get(&category)
                .map_or_else(|| category_default(category).0, |c| c.score);
            Comparison::new(user, &requirements, category)
        };
        let (cpu, gpu, ram) = (
            compare(Category::Cpu),
            compare(Category::Gpu),
            compare(Category::Ram),
        );
        let comparisons = [
            (Category::Cpu, cpu),
            (Category::Gpu, gpu),
            (Category::Ram, ram),
            (Category::Storage, compare(Category::Storage)),
        ];

        let system_score: f64 = comparisons
            .iter()
            .map(|(category, c)| f64::from(c.user) * weights.weight(*category))
            .sum();
        let game_score: f64 = Category::ALL
            .iter()
            .map(|category| requirements.rec.get(*category) * weights.weight(*category))
            .sum();

        let meets_minimum = comparisons.iter().all(|(_, c)| c.meets_min);
        let verdict = if meets_minimum && cpu.meets_rec && gpu.meets_rec {
            Verdict::Perfect
        } else if meets_minimum {
            Verdict::Good
        } else if !cpu.meets_min && gpu.meets_min {
            Verdict::CpuLimited
        } else if cpu.meets_min && !gpu.meets_min {
            Verdict::GpuLimited
        } else {
            Verdict::Insufficient
        };

        let label = |category: Category| {
            components
                .get(&category)
                .map(|c| c.input.clone())
                .unwrap_or_default()
        };
        let component_analysis = comparisons
            .iter()
            .map(|(category, c)| ComponentAnalysis {
                name: *category,
                user_score: c.user,
                min_req: c.min,
                rec_req: c.required,
                user_component: label(*category),
                status: c.into(),
            })
            .collect();

        let mut bottlenecks = Vec::new();
        if !cpu.meets_min {
            bottlenecks.push(format!(
                "Your CPU ({}) is below minimum requirements.",
                label(Category::Cpu)
            ));
        }
        if !gpu.meets_min {
            bottlenecks.push(format!(
                "Your GPU ({}) is below minimum requirements.",
                label(Category::Gpu)
            ));
        }
        if !ram.meets_min {
            bottlenecks.push("Your RAM is below minimum requirements. Consider upgrading.".to_string());
        }
        if cpu.meets_min && gpu.meets_min {
            if below_ratio(cpu.user, gpu.user, CPU_GPU_IMBALANCE) {
                bottlenecks.push("Your CPU may bottleneck your GPU in this game.".to_string());
            }
            if below_ratio(gpu.user, cpu.user, CPU_GPU_IMBALANCE) {
                bottlenecks.push("Your GPU is the main limiting factor for this game.".to_string());
            }
        }

        let (estimated_fps, settings) = fps_outlook(system_score);
        Ok(Self {
            game: game.name.clone(),
            compatibility: verdict,
            message: verdict.message(),
            system_score: round_half_up(system_score) as Score,
            game_req_score: round_half_up(game_score) as Score,
            difference: round_half_up(system_score - game_score) as i32,
            estimated_fps,
            settings,
            resolution: resolution_band(system_score),
            component_analysis,
            bottlenecks,
            meets_minimum,
            cpu_comparison: cpu,
            gpu_comparison: gpu,
        })
    }
}
