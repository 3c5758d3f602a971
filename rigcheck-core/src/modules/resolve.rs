//! Turns a free-text hardware label into a typed [`ComponentMatch`].
//!
//! Resolution never fails. A label goes through three stages, the first hit wins:
//! 1. the catalog: an entry whose name or alias appears in the label,
//! 2. the category's model-name fragments (`"i7"`, `"4070"`, `"16GB"`...),
//! 3. the category default.

use tracing::debug;

use crate::{
    common::contains_ignore_case,
    modules::catalog::Catalog,
    schemas::{
        computing::{Category, Score, Tier},
        report::{ComponentMatch, Resolution},
    },
};

/// A score assigned when any of `patterns` appears in the label.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub patterns: &'static [&'static str],
    pub score: Score,
    pub tier: Tier,
}

impl PatternRule {
    const fn new(patterns: &'static [&'static str], score: Score, tier: Tier) -> Self {
        Self {
            patterns,
            score,
            tier,
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.patterns.iter().any(|p| contains_ignore_case(input, p))
    }
}

const CPU_RULES: &[PatternRule] = &[
    PatternRule::new(&["i9", "ryzen 9", "7950"], 95, Tier::High),
    PatternRule::new(&["i7", "ryzen 7", "7800"], 85, Tier::High),
    PatternRule::new(&["i5", "ryzen 5", "5600"], 70, Tier::Mid),
    PatternRule::new(&["i3", "ryzen 3"], 45, Tier::Low),
];

const GPU_RULES: &[PatternRule] = &[
    PatternRule::new(&["4090", "3090", "7900"], 95, Tier::High),
    PatternRule::new(&["4070", "3080", "7800"], 80, Tier::High),
    PatternRule::new(&["3060", "4060", "6600"], 65, Tier::Mid),
    PatternRule::new(&["1650", "1050", "6400"], 35, Tier::Low),
];

const RAM_RULES: &[PatternRule] = &[
    PatternRule::new(&["32gb"], 85, Tier::High),
    PatternRule::new(&["16gb"], 60, Tier::Mid),
    PatternRule::new(&["8gb"], 35, Tier::Low),
];

const STORAGE_RULES: &[PatternRule] = &[
    PatternRule::new(&["nvme"], 80, Tier::High),
    PatternRule::new(&["ssd"], 60, Tier::Mid),
];

pub fn pattern_rules(category: Category) -> &'static [PatternRule] {
    match category {
        Category::Cpu => CPU_RULES,
        Category::Gpu => GPU_RULES,
        Category::Ram => RAM_RULES,
        Category::Storage => STORAGE_RULES,
    }
}

/// Score and tier given to a label nothing recognizes.
pub fn category_default(category: Category) -> (Score, Tier) {
    match category {
        Category::Cpu | Category::Gpu => (50, Tier::Mid),
        Category::Ram => (40, Tier::Low),
        Category::Storage => (30, Tier::Low),
    }
}

pub fn find_match(catalog: &Catalog, category: Category, input: &str) -> ComponentMatch {
    if let Some(component) = catalog.find_in_label(category, input) {
        debug!(%category, input, matched = %component.name, "resolved from catalog");
        return ComponentMatch::from_component(component, input);
    }

    if let Some(rule) = pattern_rules(category).iter().find(|r| r.matches(input)) {
        debug!(%category, input, score = rule.score, "resolved by model-name fragment");
        return ComponentMatch::unresolved(input, rule.score, rule.tier, Resolution::Pattern);
    }

    let (score, tier) = category_default(category);
    debug!(%category, input, score, "unrecognized, using category default");
    ComponentMatch::unresolved(input, score, tier, Resolution::Default)
}
