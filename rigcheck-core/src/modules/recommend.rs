use serde::Serialize;

use crate::{
    common::Price,
    config::Thresholds,
    modules::pairing::{Limiter, Pairing},
    schemas::{
        computing::{Category, Tier},
        report::{ComponentMatch, Components},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
}

/// A part worth buying, with an illustrative street price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpgradeOption {
    pub name: &'static str,
    pub price: Price,
}

const fn option(name: &'static str, dollars: f64) -> UpgradeOption {
    UpgradeOption {
        name,
        price: Price::usd(dollars),
    }
}

const BUDGET_CPUS: &[UpgradeOption] = &[option("Ryzen 5 5600X", 150.0), option("i5-12400F", 140.0)];
const ENTHUSIAST_CPUS: &[UpgradeOption] = &[option("Ryzen 7 7800X3D", 350.0)];
const MAINSTREAM_GPUS: &[UpgradeOption] = &[option("RTX 3060", 280.0), option("RX 6600", 200.0)];
const PERFORMANCE_GPUS: &[UpgradeOption] = &[option("RTX 4070", 500.0), option("RX 7800 XT", 480.0)];
const MEMORY_KITS: &[UpgradeOption] = &[option("16GB DDR4-3200", 40.0), option("DDR5-6000", 80.0)];
const ENTRY_GPUS: &[UpgradeOption] = &[option("GTX 1660 Super", 200.0), option("RTX 3050", 230.0)];
const STEP_UP_GPUS: &[UpgradeOption] = &[option("RTX 3060", 280.0)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub component: Category,
    pub priority: Priority,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<UpgradeOption>,
}

impl Recommendation {
    fn new(component: Category, priority: Priority, message: String, suggestions: &[UpgradeOption]) -> Self {
        Self {
            component,
            priority,
            message,
            suggestions: suggestions.to_vec(),
        }
    }
}

/// "A ($1) or B ($2)"
fn describe(options: &[UpgradeOption]) -> String {
    options
        .iter()
        .map(|o| format!("{} ({})", o.name, o.price))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Lowest score wins; ties go to the category listed first.
fn weakest(components: &Components) -> Option<(Category, &ComponentMatch)> {
    components
        .iter()
        .fold(None, |weakest: Option<(Category, &ComponentMatch)>, (category, part)| {
            match weakest {
                Some((_, w)) if w.score <= part.score => weakest,
                _ => Some((*category, part)),
            }
        })
}

fn upgrade_weakest(category: Category, part: &ComponentMatch) -> Recommendation {
    match category {
        Category::Cpu => {
            let options = if part.tier == Tier::Low {
                BUDGET_CPUS
            } else {
                ENTHUSIAST_CPUS
            };
            Recommendation::new(
                category,
                Priority::High,
                format!(
                    "Your {} holds back performance. A {} would balance your system.",
                    part.name,
                    describe(options)
                ),
                options,
            )
        }
        Category::Gpu => {
            let options = if part.tier == Tier::Low {
                MAINSTREAM_GPUS
            } else {
                PERFORMANCE_GPUS
            };
            Recommendation::new(
                category,
                Priority::High,
                format!(
                    "Upgrading your {} would give the biggest FPS boost. Consider an {}.",
                    part.name,
                    describe(options)
                ),
                options,
            )
        }
        Category::Ram => Recommendation::new(
            category,
            Priority::High,
            format!(
                "Your {} is slow. {} would improve minimum FPS.",
                part.name,
                describe(MEMORY_KITS)
            ),
            MEMORY_KITS,
        ),
        Category::Storage => Recommendation::new(
            category,
            Priority::High,
            format!(
                "Your {} is slow. An NVMe SSD ($50-100) would reduce load times dramatically.",
                part.name
            ),
            &[],
        ),
    }
}

/// Upgrade advice, in a fixed order: the weakest part, then the pairing
/// limiter, then a weak GPU. The same category may come up more than once.
pub fn generate_recommendations(
    components: &Components,
    pairing: &Pairing,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some((category, part)) = weakest(components) {
        recommendations.push(upgrade_weakest(category, part));
    }

    match pairing.bottleneck {
        Limiter::Cpu => recommendations.push(Recommendation::new(
            Category::Cpu,
            Priority::Medium,
            "CPU upgrade recommended for higher FPS in esports titles like CS2 and Valorant."
                .to_string(),
            &[],
        )),
        Limiter::Gpu => recommendations.push(Recommendation::new(
            Category::Gpu,
            Priority::Medium,
            "GPU upgrade recommended for better visuals and FPS in AAA games like Cyberpunk 2077."
                .to_string(),
            &[],
        )),
        Limiter::None => {}
    }

    if let Some(gpu) = components.get(&Category::Gpu) {
        if gpu.score < thresholds.weak_gpu_score {
            let options = if gpu.tier == Tier::Low {
                ENTRY_GPUS
            } else {
                STEP_UP_GPUS
            };
            recommendations.push(Recommendation::new(
                Category::Gpu,
                Priority::Medium,
                format!(
                    "For 1080p gaming at 60 FPS, a {} would be a solid upgrade.",
                    describe(options)
                ),
                options,
            ));
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::{generate_recommendations, Priority};
    use crate::{
        config::Thresholds,
        modules::pairing::Pairing,
        schemas::{
            computing::{Category, Score, Tier},
            report::{ComponentMatch, Components, Resolution},
        },
    };

    fn build(parts: &[(Category, &str, Score, Tier)]) -> Components {
        parts
            .iter()
            .map(|(category, name, score, tier)| {
                (
                    *category,
                    ComponentMatch::unresolved(name, *score, *tier, Resolution::Pattern),
                )
            })
            .collect()
    }

    #[test]
    fn test_weakest_cpu_message() {
        let components = build(&[
            (Category::Cpu, "Intel Pentium Gold G6400", 38, Tier::Low),
            (Category::Gpu, "NVIDIA RTX 4090", 98, Tier::High),
            (Category::Ram, "32GB", 85, Tier::High),
            (Category::Storage, "NVMe", 80, Tier::High),
        ]);
        let t = Thresholds::default();
        let pairing = Pairing::new(38, 98, &t);
        let recs = generate_recommendations(&components, &pairing, &t);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].component, Category::Cpu);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(
            recs[0].message,
            "Your Intel Pentium Gold G6400 holds back performance. A Ryzen 5 5600X ($150) or i5-12400F ($140) would balance your system."
        );
        assert_eq!(recs[0].suggestions.len(), 2);
        assert_eq!(recs[1].component, Category::Cpu);
        assert_eq!(recs[1].priority, Priority::Medium);
    }

    #[test]
    fn test_duplicate_gpu_recommendations_are_kept() {
        let components = build(&[
            (Category::Cpu, "Intel Core i9-13900K", 98, Tier::High),
            (Category::Gpu, "NVIDIA GT 1030", 25, Tier::Low),
            (Category::Ram, "32GB", 85, Tier::High),
            (Category::Storage, "NVMe", 80, Tier::High),
        ]);
        let t = Thresholds::default();
        let recs = generate_recommendations(&components, &Pairing::new(98, 25, &t), &t);
        let gpu: Vec<_> = recs.iter().filter(|r| r.component == Category::Gpu).collect();
        assert_eq!(gpu.len(), 3);
        assert_eq!(gpu[0].priority, Priority::High);
        assert!(gpu[2].message.contains("GTX 1660 Super ($200) or RTX 3050 ($230)"));
    }

    #[test]
    fn test_ties_go_to_earlier_category() {
        let components = build(&[
            (Category::Cpu, "cpu", 60, Tier::Mid),
            (Category::Gpu, "gpu", 60, Tier::Mid),
            (Category::Ram, "ram", 60, Tier::Mid),
            (Category::Storage, "disk", 60, Tier::Mid),
        ]);
        let t = Thresholds::default();
        let recs = generate_recommendations(&components, &Pairing::new(60, 60, &t), &t);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].component, Category::Cpu);
        assert!(recs[0].message.contains("Ryzen 7 7800X3D ($350)"));
    }

    #[test]
    fn test_storage_and_empty() {
        let components = build(&[
            (Category::Cpu, "cpu", 70, Tier::Mid),
            (Category::Gpu, "gpu", 70, Tier::Mid),
            (Category::Storage, "WD Blue 1TB HDD", 15, Tier::Low),
        ]);
        let t = Thresholds::default();
        let recs = generate_recommendations(&components, &Pairing::new(70, 70, &t), &t);
        assert_eq!(recs[0].component, Category::Storage);
        assert!(recs[0].suggestions.is_empty());
        assert!(recs[0].message.starts_with("Your WD Blue 1TB HDD is slow."));

        let none = generate_recommendations(&Components::new(), &Pairing::new(50, 50, &t), &t);
        assert!(none.is_empty());
    }

    #[test]
    fn test_suggestion_prices_serialize_as_text() {
        let components = build(&[(Category::Ram, "8GB", 35, Tier::Low)]);
        let t = Thresholds::default();
        let recs = generate_recommendations(&components, &Pairing::new(50, 50, &t), &t);
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert_eq!(json["component"], "ram");
        assert_eq!(json["suggestions"][0]["price"], "$40");
    }
}
