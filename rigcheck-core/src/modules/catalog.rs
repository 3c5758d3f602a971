use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    common::contains_ignore_case,
    error::{EngineError, EngineResult},
    schemas::computing::{Category, Component, ComponentId, Tier, MAX_SCORE},
};

/// Static, tiered lists of components per category.
///
/// Read-only once built. Entries keep their declaration order, which is the
/// order every query returns them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    cpu: Vec<Component>,
    #[serde(default)]
    gpu: Vec<Component>,
    #[serde(default)]
    ram: Vec<Component>,
    #[serde(default)]
    storage: Vec<Component>,
}

impl Catalog {
    /// Replace the entries of one category.
    pub fn with_category(mut self, category: Category, components: Vec<Component>) -> Self {
        *self.components_mut(category) = components;
        self
    }

    /// Parse a `{"cpu": [...], "gpu": [...], "ram": [...], "storage": [...]}` document.
    pub fn from_json_str(s: &str) -> EngineResult<Self> {
        let catalog: Self = serde_json::from_str(s)?;
        catalog.validated()
    }

    /// Fill in missing ids and check scores and name uniqueness.
    ///
    /// # Errors
    /// Errors if a score is above 100, or if a name appears twice within one tier.
    pub fn validated(mut self) -> EngineResult<Self> {
        for category in Category::ALL {
            let mut seen: HashSet<(Tier, String)> = HashSet::new();
            for component in self.components_mut(category).iter_mut() {
                if component.score > MAX_SCORE {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{} `{}` has score {}, above {}",
                        category, component.name, component.score, MAX_SCORE
                    )));
                }
                if component.name.trim().is_empty() {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{} entry with an empty name",
                        category
                    )));
                }
                if !seen.insert((component.tier, component.name.to_lowercase())) {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{} `{}` appears twice in the {} tier",
                        category, component.name, component.tier
                    )));
                }
                if component.id.is_empty() {
                    component.id = ComponentId::from_name(&component.name);
                }
            }
        }
        Ok(self)
    }

    pub fn components(&self, category: Category) -> &[Component] {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
        }
    }

    fn components_mut(&mut self, category: Category) -> &mut Vec<Component> {
        match category {
            Category::Cpu => &mut self.cpu,
            Category::Gpu => &mut self.gpu,
            Category::Ram => &mut self.ram,
            Category::Storage => &mut self.storage,
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.components(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `limit` entries of a category, in declaration order.
    pub fn list(&self, category: Category, limit: usize) -> &[Component] {
        let all = self.components(category);
        &all[..limit.min(all.len())]
    }

    /// Every entry whose name contains `query`, case-insensitively.
    pub fn search(&self, category: Category, query: &str) -> Vec<&Component> {
        self.components(category)
            .iter()
            .filter(|c| contains_ignore_case(&c.name, query))
            .collect()
    }

    /// The first entry whose name contains `query`, case-insensitively.
    pub fn find_by_name_substring(&self, category: Category, query: &str) -> Option<&Component> {
        self.components(category)
            .iter()
            .find(|c| contains_ignore_case(&c.name, query))
    }

    pub fn get(&self, id: &ComponentId) -> Option<(Category, &Component)> {
        Category::ALL.iter().find_map(|category| {
            self.components(*category)
                .iter()
                .find(|c| &c.id == id)
                .map(|c| (*category, c))
        })
    }

    /// The entry whose name or alias appears in `input`.
    ///
    /// When several entries match, the longest matching needle wins, so
    /// "RTX 3060 Ti" is not taken for the "RTX 3060" listed before it.
    /// Ties keep declaration order.
    pub fn find_in_label(&self, category: Category, input: &str) -> Option<&Component> {
        let mut best: Option<(usize, &Component)> = None;
        for component in self.components(category) {
            let longest = component
                .needles()
                .filter(|needle| contains_ignore_case(input, needle))
                .map(|needle| needle.trim().len())
                .max();
            if let Some(len) = longest {
                if best.map_or(true, |(best_len, _)| len > best_len) {
                    best = Some((len, component));
                }
            }
        }
        best.map(|(_, component)| component)
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::{
        modules::builtin::builtin_catalog,
        schemas::computing::{Category, Component, ComponentId, Tier},
    };

    #[test]
    fn test_list_keeps_declaration_order_and_truncates() {
        let catalog = builtin_catalog();
        let cpus = catalog.list(Category::Cpu, 3);
        assert_eq!(cpus.len(), 3);
        assert_eq!(cpus[0].name, "Intel Core i3-10100");
        assert_eq!(cpus[2].name, "Intel Pentium Gold G6400");
        assert_eq!(catalog.list(Category::Gpu, 500).len(), catalog.components(Category::Gpu).len());
    }

    #[test]
    fn test_missing_category_is_empty() {
        let catalog = Catalog::default()
            .with_category(Category::Cpu, vec![Component::new("Intel Core i3-10100", 45, Tier::Low)]);
        assert!(catalog.list(Category::Storage, 50).is_empty());
        assert!(catalog.search(Category::Storage, "ssd").is_empty());
        assert!(catalog.find_by_name_substring(Category::Storage, "ssd").is_none());
    }

    #[test]
    fn test_search_and_find() {
        let catalog = builtin_catalog();
        let radeons = catalog.search(Category::Gpu, "radeon rx 79");
        assert_eq!(radeons.len(), 2);
        assert_eq!(
            catalog.find_by_name_substring(Category::Gpu, "rtx 3060").unwrap().name,
            "NVIDIA RTX 3060"
        );
        assert!(catalog.find_by_name_substring(Category::Gpu, "").is_none());
    }

    #[test]
    fn test_find_in_label_prefers_longest_needle() {
        let catalog = builtin_catalog();
        let ti = catalog.find_in_label(Category::Gpu, "Gigabyte NVIDIA RTX 3060 Ti Eagle").unwrap();
        assert_eq!(ti.name, "NVIDIA RTX 3060 Ti");
        let xtx = catalog.find_in_label(Category::Gpu, "AMD Radeon RX 7900 XTX").unwrap();
        assert_eq!(xtx.name, "AMD Radeon RX 7900 XTX");
        let alias = catalog.find_in_label(Category::Cpu, "my old i9 box").unwrap();
        assert_eq!(alias.name, "Intel Core i9-13900K");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = builtin_catalog();
        let (category, component) = catalog.get(&ComponentId::from("nvidia-rtx-4090")).unwrap();
        assert_eq!(category, Category::Gpu);
        assert_eq!(component.score, 98);
    }

    #[test]
    fn test_from_json_fills_ids_and_validates() {
        let catalog = Catalog::from_json_str(
            r#"{ "gpu": [ { "name": "NVIDIA RTX 4090", "score": 98, "tier": "high" } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.components(Category::Gpu)[0].id.as_str(), "nvidia-rtx-4090");

        let err = Catalog::from_json_str(
            r#"{ "gpu": [ { "name": "NVIDIA RTX 4090", "score": 180, "tier": "high" } ] }"#,
        )
        .expect_err("score above 100");
        assert!(format!("{}", err).contains("above 100"));

        assert!(Catalog::from_json_str(
            r#"{ "ram": [
                { "name": "DDR4 3200MHz 16GB", "score": 55, "tier": "mid" },
                { "name": "ddr4 3200mhz 16gb", "score": 56, "tier": "mid" }
            ] }"#,
        )
        .is_err());
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.clone().validated().unwrap(), catalog);
        for category in Category::ALL {
            for tier in Tier::ALL {
                assert!(catalog.components(category).iter().any(|c| c.tier == tier));
            }
        }
    }
}
