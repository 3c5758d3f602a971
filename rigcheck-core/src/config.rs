//! Tunable engine parameters.
//!
//! Every field has the reference default, so a JSON document only needs to
//! name what it overrides.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{EngineError, EngineResult},
    schemas::computing::{Category, Score, MAX_SCORE},
};

/// Importance of each component in the overall score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
    pub storage: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cpu: 0.35,
            gpu: 0.45,
            ram: 0.15,
            storage: 0.05,
        }
    }
}

impl Weights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Cpu => self.cpu,
            Category::Gpu => self.gpu,
            Category::Ram => self.ram,
            Category::Storage => self.storage,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        let all = [self.cpu, self.gpu, self.ram, self.storage];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EngineError::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidConfig(format!(
                "weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

/// Ratios and cut-offs used by the bottleneck detector and the recommendation rules.
/// The severe/moderate ratios and the pairing ratio are independent on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub severe_ratio: f64,
    pub moderate_ratio: f64,
    pub pairing_ratio: f64,
    pub weak_ram_score: Score,
    pub weak_gpu_score: Score,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            severe_ratio: 0.5,
            moderate_ratio: 0.7,
            pairing_ratio: 0.6,
            weak_ram_score: 40,
            weak_gpu_score: 45,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, ratio) in [
            ("severe_ratio", self.severe_ratio),
            ("moderate_ratio", self.moderate_ratio),
            ("pairing_ratio", self.pairing_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, ratio
                )));
            }
        }
        if self.severe_ratio > self.moderate_ratio {
            return Err(EngineError::InvalidConfig(
                "severe_ratio must not exceed moderate_ratio".to_string(),
            ));
        }
        if self.weak_ram_score > MAX_SCORE || self.weak_gpu_score > MAX_SCORE {
            return Err(EngineError::InvalidConfig(format!(
                "score cut-offs must be at most {}",
                MAX_SCORE
            )));
        }
        Ok(())
    }
}

/// What to do with a blank entry in the user's specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingComponentPolicy {
    /// Resolve it like any unmatched label, to the category default.
    Default,
    /// Leave it out: the aggregate renormalizes and the detectors skip it.
    Omit,
    /// Refuse to analyze.
    Reject,
}

impl Default for MissingComponentPolicy {
    fn default() -> Self {
        Self::Default
    }
}

impl FromStr for MissingComponentPolicy {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "omit" => Ok(Self::Omit),
            "reject" => Ok(Self::Reject),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown missing-component policy `{}`",
                other
            ))),
        }
    }
}

impl Display for MissingComponentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Default => "default",
                Self::Omit => "omit",
                Self::Reject => "reject",
            }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: Weights,
    pub thresholds: Thresholds,
    pub missing: MissingComponentPolicy,
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{EngineConfig, MissingComponentPolicy, Weights};

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        let weights = Weights::default();
        let sum = weights.cpu + weights.gpu + weights.ram + weights.storage;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_json_str(
            r#"{ "thresholds": { "pairing_ratio": 0.65 }, "missing": "omit" }"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.pairing_ratio, 0.65);
        assert_eq!(config.thresholds.severe_ratio, 0.5);
        assert_eq!(config.weights, Weights::default());
        assert_eq!(config.missing, MissingComponentPolicy::Omit);
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let err = EngineConfig::from_json_str(r#"{ "weights": { "cpu": 0.5 } }"#)
            .expect_err("weights sum to 1.15");
        assert!(format!("{}", err).contains("sum to 1.0"));
    }

    #[test]
    fn test_rejects_bad_ratios() {
        assert!(EngineConfig::from_json_str(r#"{ "thresholds": { "severe_ratio": 0.0 } }"#).is_err());
        assert!(
            EngineConfig::from_json_str(r#"{ "thresholds": { "severe_ratio": 0.8 } }"#).is_err()
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            MissingComponentPolicy::from_str("Reject").unwrap(),
            MissingComponentPolicy::Reject
        );
        assert!(MissingComponentPolicy::from_str("strict").is_err());
    }
}
