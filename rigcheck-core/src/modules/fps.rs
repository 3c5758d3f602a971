//! Expected frame rates per CPU tier x GPU tier combination.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::schemas::{
    computing::Tier,
    fps::{FpsEstimate, FpsRange, FpsRow, GameCategory},
};

const ESPORT_LOW: &[&str] = &["CS2 (Low)", "Valorant (Low)", "LoL (Medium)"];
const ESPORT_MEDIUM: &[&str] = &["CS2 (Medium)", "Valorant (High)", "LoL (High)"];
const ESPORT_HIGH: &[&str] = &["CS2 (High)", "Valorant (High)", "LoL (High)"];
const ESPORT_HIGH_ULTRA: &[&str] = &["CS2 (High)", "Valorant (High)", "LoL (Ultra)"];
const ESPORT_ULTRA: &[&str] = &["CS2 (Ultra)", "Valorant (Ultra)", "LoL (Ultra)"];

const AAA_LOW: &[&str] = &["Cyberpunk 2077 (Low)", "Starfield (Low)", "RDR2 (Low)"];
const AAA_LOW_MEDIUM: &[&str] = &["Cyberpunk 2077 (Low-Med)", "Starfield (Low)", "RDR2 (Low)"];
const AAA_MEDIUM: &[&str] = &["Cyberpunk 2077 (Medium)", "Starfield (Medium)", "RDR2 (Medium)"];
const AAA_HIGH: &[&str] = &["Cyberpunk 2077 (High)", "Starfield (Medium-High)", "RDR2 (High)"];
const AAA_HIGH_MEDIUM: &[&str] = &["Cyberpunk 2077 (High)", "Starfield (Medium)", "RDR2 (High)"];
const AAA_ULTRA: &[&str] = &["Cyberpunk 2077 (Ultra)", "Starfield (High-Ultra)", "RDR2 (Ultra)"];

const COMPETITIVE_LOW: &[&str] = &["Apex (Low)", "Overwatch 2 (Low)", "Fortnite (Low)"];
const COMPETITIVE_MEDIUM: &[&str] = &["Apex (Medium)", "Overwatch 2 (Medium)", "Fortnite (Medium)"];
const COMPETITIVE_HIGH: &[&str] = &["Apex (High)", "Overwatch 2 (High)", "Fortnite (High)"];
const COMPETITIVE_ULTRA: &[&str] = &["Apex (Ultra)", "Overwatch 2 (Ultra)", "Fortnite (Ultra)"];

const fn estimate(fps: FpsRange, settings: &'static str, games: &'static [&'static str]) -> FpsEstimate {
    FpsEstimate {
        fps,
        settings,
        games,
    }
}

const fn row(esport: FpsEstimate, aaa_gpu: FpsEstimate, competitive: FpsEstimate) -> FpsRow {
    FpsRow {
        esport,
        aaa_gpu,
        competitive,
    }
}

/// The table cell for a CPU/GPU tier pair. Every pair has one.
pub fn lookup(cpu: Tier, gpu: Tier) -> FpsRow {
    use Tier::*;
    match (cpu, gpu) {
        (Low, Low) => row(
            estimate(FpsRange::new(40, 60), "Low", ESPORT_LOW),
            estimate(FpsRange::new(20, 30), "Low", AAA_LOW),
            estimate(FpsRange::new(30, 50), "Low", COMPETITIVE_LOW),
        ),
        (Low, Mid) => row(
            estimate(FpsRange::new(60, 80), "Medium", ESPORT_MEDIUM),
            estimate(FpsRange::new(30, 40), "Low", AAA_LOW),
            estimate(FpsRange::new(50, 70), "Medium", COMPETITIVE_MEDIUM),
        ),
        (Low, High) => row(
            estimate(FpsRange::new(70, 90), "High", ESPORT_HIGH),
            estimate(FpsRange::new(35, 45), "Medium", AAA_LOW_MEDIUM),
            estimate(FpsRange::new(60, 80), "High", COMPETITIVE_HIGH),
        ),
        (Mid, Low) => row(
            estimate(FpsRange::new(60, 80), "Medium", ESPORT_MEDIUM),
            estimate(FpsRange::new(30, 40), "Low", AAA_LOW),
            estimate(FpsRange::new(50, 70), "Medium", COMPETITIVE_MEDIUM),
        ),
        (Mid, Mid) => row(
            estimate(FpsRange::new(90, 120), "High", ESPORT_HIGH_ULTRA),
            estimate(FpsRange::new(45, 55), "Medium", AAA_MEDIUM),
            estimate(FpsRange::new(70, 90), "High", COMPETITIVE_HIGH),
        ),
        (Mid, High) => row(
            estimate(FpsRange::new(120, 165), "Ultra", ESPORT_ULTRA),
            estimate(FpsRange::new(55, 70), "High", AAA_HIGH),
            estimate(FpsRange::new(90, 120), "Ultra", COMPETITIVE_ULTRA),
        ),
        (High, Low) => row(
            estimate(FpsRange::new(70, 90), "Medium", ESPORT_HIGH_ULTRA),
            estimate(FpsRange::new(35, 45), "Low", AAA_LOW),
            estimate(FpsRange::new(60, 80), "Medium", COMPETITIVE_HIGH),
        ),
        (High, Mid) => row(
            estimate(FpsRange::new(100, 144), "Ultra", ESPORT_ULTRA),
            estimate(FpsRange::new(50, 65), "High", AAA_HIGH_MEDIUM),
            estimate(FpsRange::new(80, 110), "Ultra", COMPETITIVE_ULTRA),
        ),
        (High, High) => row(
            estimate(FpsRange::open(165, 240), "Ultra", ESPORT_ULTRA),
            estimate(FpsRange::new(80, 110), "Ultra", AAA_ULTRA),
            estimate(FpsRange::new(120, 165), "Ultra", COMPETITIVE_ULTRA),
        ),
    }
}

/// `"{cpu}_{gpu}"`, e.g. `"mid_high"`.
pub fn combination_key(cpu: Tier, gpu: Tier) -> String {
    format!("{}_{}", cpu, gpu)
}

pub const DEFAULT_RESOLUTION: &str = "1080p";

const PROFILE_NOTES: &str = "Estimates based on 1080p benchmarks. Lower settings may improve FPS.";

/// FPS outlook for a CPU/GPU pair, independent of RAM and storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamingProfile {
    pub performance_by_category: BTreeMap<GameCategory, FpsEstimate>,
    pub combination: String,
    pub resolution_used: String,
    pub notes: &'static str,
}

impl GamingProfile {
    pub fn new(cpu: Tier, gpu: Tier, resolution: Option<&str>) -> Self {
        Self {
            performance_by_category: lookup(cpu, gpu).to_map(),
            combination: combination_key(cpu, gpu),
            resolution_used: resolution
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_RESOLUTION)
                .to_string(),
            notes: PROFILE_NOTES,
        }
    }
}
