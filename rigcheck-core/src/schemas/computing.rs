use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, PickFirst};

use crate::{
    common::{slugify, IgnoreComma},
    error::EngineError,
};

/// Normalized benchmark figure, 0 to 100.
pub type Score = u8;

pub const MAX_SCORE: Score = 100;

/// The four kinds of part a build is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    Storage,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Cpu, Self::Gpu, Self::Ram, Self::Storage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Ram => "ram",
            Self::Storage => "storage",
        }
    }
}

impl FromStr for Category {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" | "cpus" => Ok(Self::Cpu),
            "gpu" | "gpus" => Ok(Self::Gpu),
            "ram" | "memory" => Ok(Self::Ram),
            "storage" => Ok(Self::Storage),
            _ => Err(EngineError::UnknownCategory(s.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Cpu => "CPU",
                Self::Gpu => "GPU",
                Self::Ram => "RAM",
                Self::Storage => "STORAGE",
            }
        )
    }
}

/// Coarse performance bucket, assigned when the catalog is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::Low, Self::Mid, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl FromStr for Tier {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => Err(EngineError::InvalidCatalog(format!("unknown tier `{}`", s))),
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One hardware part in the catalog.
///
/// `attributes` holds informational, category-specific fields (clocks, VRAM,
/// capacity, read/write speed...). They are never consumed by the scoring.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "ComponentId::is_empty")]
    pub id: ComponentId,
    pub name: String,
    pub score: Score,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError<PickFirst<(_, Option<IgnoreComma<u32>>)>>")]
    pub passmark_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Component {
    pub fn new(name: &str, score: Score, tier: Tier) -> Self {
        Self {
            id: ComponentId::from_name(name),
            name: name.to_string(),
            score,
            tier,
            passmark_score: None,
            aliases: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_passmark(mut self, passmark_score: u32) -> Self {
        self.passmark_score = Some(passmark_score);
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<&str, &str>) -> Self {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Canonical name followed by the registered aliases.
    pub fn needles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Category, Component, Tier};

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("CPU").unwrap(), Category::Cpu);
        assert_eq!(Category::from_str("storage").unwrap(), Category::Storage);
        assert_eq!(Category::from_str(" Gpu ").unwrap(), Category::Gpu);
        assert!(Category::from_str("PSU").is_err());
        assert_eq!(Category::Storage.to_string(), "STORAGE");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Low < Tier::Mid);
        assert!(Tier::Mid < Tier::High);
    }

    #[test]
    fn test_component_from_json_with_comma_benchmark() {
        let component: Component = serde_json::from_str(
            r#"{
                "name": "AMD Ryzen 9 7950X",
                "score": 96,
                "tier": "high",
                "passmark_score": "34,987",
                "attributes": { "cores": "16" }
            }"#,
        )
        .unwrap();
        assert_eq!(component.passmark_score, Some(34987));
        assert_eq!(component.attribute("cores"), Some("16"));
        assert!(component.id.is_empty());
    }

    #[test]
    fn test_component_numeric_and_garbage_benchmark() {
        let numeric: Component = serde_json::from_str(
            r#"{ "name": "NVIDIA RTX 4090", "score": 98, "tier": "high", "passmark_score": 38654 }"#,
        )
        .unwrap();
        assert_eq!(numeric.passmark_score, Some(38654));

        let garbage: Component = serde_json::from_str(
            r#"{ "name": "NVIDIA RTX 4090", "score": 98, "tier": "high", "passmark_score": "n/a" }"#,
        )
        .unwrap();
        assert_eq!(garbage.passmark_score, None);
    }
}
