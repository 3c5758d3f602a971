use std::{collections::BTreeMap, fmt::Display};

use serde::Serialize;
use serde_with::SerializeDisplay;

/// Game families the FPS table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    Esport,
    AaaGpu,
    Competitive,
}

impl GameCategory {
    pub const ALL: [GameCategory; 3] = [Self::Esport, Self::AaaGpu, Self::Competitive];
}

/// A frames-per-second bucket. The numeric pair is canonical; the
/// `"40-60 FPS"` form is only ever derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay)]
pub struct FpsRange {
    pub min: u16,
    pub max: u16,
    /// Renders as `max+`: hardware may exceed the upper bound.
    pub open_ended: bool,
}

impl FpsRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            open_ended: false,
        }
    }

    pub const fn open(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            open_ended: true,
        }
    }

    pub fn midpoint(&self) -> u16 {
        self.min + (self.max - self.min) / 2
    }

    pub fn contains(&self, fps: u16) -> bool {
        fps >= self.min && (self.open_ended || fps <= self.max)
    }
}

impl Display for FpsRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}{} FPS",
            self.min,
            self.max,
            if self.open_ended { "+" } else { "" }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FpsEstimate {
    pub fps: FpsRange,
    pub settings: &'static str,
    pub games: &'static [&'static str],
}

/// One cell of the CPU tier x GPU tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FpsRow {
    pub esport: FpsEstimate,
    pub aaa_gpu: FpsEstimate,
    pub competitive: FpsEstimate,
}

impl FpsRow {
    pub fn get(&self, category: GameCategory) -> &FpsEstimate {
        match category {
            GameCategory::Esport => &self.esport,
            GameCategory::AaaGpu => &self.aaa_gpu,
            GameCategory::Competitive => &self.competitive,
        }
    }

    pub fn to_map(&self) -> BTreeMap<GameCategory, FpsEstimate> {
        GameCategory::ALL
            .iter()
            .map(|category| (*category, *self.get(*category)))
            .collect()
    }
}
