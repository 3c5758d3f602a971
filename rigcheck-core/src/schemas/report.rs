use std::{collections::BTreeMap, fmt::Display};

use serde::{ser::SerializeStruct, Serialize};
use serde_with::SerializeDisplay;

use crate::{
    modules::{bottleneck::Bottleneck, pairing::Pairing, recommend::Recommendation},
    schemas::{
        computing::{Category, Component, ComponentId, Score, Tier},
        fps::{FpsEstimate, GameCategory},
    },
};

/// How a free-text label was turned into a [`ComponentMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// A catalog entry's name or alias matched.
    Catalog,
    /// A category fallback rule matched a model-name fragment.
    Pattern,
    /// Nothing matched; the category's neutral default was used.
    Default,
}

/// Coarse per-component badge. Deliberately not the same thresholds as [`PerformanceTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay)]
pub enum Badge {
    EntryLevel,
    MidRange,
    UpperMid,
    HighEnd,
}

impl Badge {
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s >= 80 => Self::HighEnd,
            s if s >= 60 => Self::UpperMid,
            s if s >= 40 => Self::MidRange,
            _ => Self::EntryLevel,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighEnd => "High End",
            Self::UpperMid => "Upper Mid",
            Self::MidRange => "Mid Range",
            Self::EntryLevel => "Entry Level",
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall build grade, banded on the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PerformanceTier {
    BudgetBuild,
    EntryLevel,
    MidRange,
    UpperMidRange,
    HighPerformance,
    EnthusiastGrade,
}

impl PerformanceTier {
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s >= 90 => Self::EnthusiastGrade,
            s if s >= 80 => Self::HighPerformance,
            s if s >= 70 => Self::UpperMidRange,
            s if s >= 60 => Self::MidRange,
            s if s >= 45 => Self::EntryLevel,
            _ => Self::BudgetBuild,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EnthusiastGrade => "Enthusiast Grade",
            Self::HighPerformance => "High Performance",
            Self::UpperMidRange => "Upper Mid-Range",
            Self::MidRange => "Mid-Range",
            Self::EntryLevel => "Entry Level",
            Self::BudgetBuild => "Budget Build",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EnthusiastGrade => {
                "Capable of 4K gaming at high settings. Handles any game with ease."
            }
            Self::HighPerformance => {
                "Excellent 1440p gaming rig. Great for AAA titles at high settings."
            }
            Self::UpperMidRange => {
                "Solid 1080p/1440p performer. Handles most games at high settings."
            }
            Self::MidRange => "Good 1080p gaming. Plays most games at medium-high settings.",
            Self::EntryLevel => {
                "Capable 1080p gaming for esports and older titles at low-medium settings."
            }
            Self::BudgetBuild => {
                "Basic gaming performance. Best for esports titles at low settings (30-40 FPS)."
            }
        }
    }

    /// Accent colour the dashboard paints the grade with.
    pub fn color(&self) -> &'static str {
        match self {
            Self::EnthusiastGrade => "#9f7aea",
            Self::HighPerformance => "#b794f4",
            Self::UpperMidRange => "#d6bcfa",
            Self::MidRange => "#c4b5fd",
            Self::EntryLevel => "#9f7aea",
            Self::BudgetBuild => "#6b46c1",
        }
    }
}

impl Serialize for PerformanceTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("PerformanceTier", 3)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}

/// A user-supplied label resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Canonical catalog name, or the trimmed input when nothing in the catalog matched.
    pub name: String,
    pub input: String,
    pub score: Score,
    pub tier: Tier,
    pub badge: Badge,
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ComponentMatch {
    pub fn from_component(component: &Component, input: &str) -> Self {
        Self {
            id: Some(component.id.clone()),
            name: component.name.clone(),
            input: input.to_string(),
            score: component.score,
            tier: component.tier,
            badge: Badge::from_score(component.score),
            resolution: Resolution::Catalog,
            attributes: component.attributes.clone(),
        }
    }

    pub fn unresolved(input: &str, score: Score, tier: Tier, resolution: Resolution) -> Self {
        Self {
            id: None,
            name: input.trim().to_string(),
            input: input.to_string(),
            score,
            tier,
            badge: Badge::from_score(score),
            resolution,
            attributes: BTreeMap::new(),
        }
    }
}

/// Resolved parts of one build, keyed by category.
pub type Components = BTreeMap<Category, ComponentMatch>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub components: Components,
    pub overall_score: Score,
    pub performance_tier: PerformanceTier,
    pub fps_estimates: BTreeMap<GameCategory, FpsEstimate>,
    pub bottlenecks: Vec<Bottleneck>,
    pub pairing: Pairing,
    pub recommendations: Vec<Recommendation>,
}
