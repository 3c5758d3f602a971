use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::{
    config::Thresholds,
    schemas::{
        computing::{Category, Score},
        report::{ComponentMatch, Components},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckKind {
    Cpu,
    Gpu,
    Ram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A component that holds the rest of the build back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bottleneck {
    #[serde(rename = "type")]
    pub kind: BottleneckKind,
    pub severity: Severity,
    pub message: String,
}

impl Bottleneck {
    fn new(kind: BottleneckKind, severity: Severity, message: String) -> Self {
        Self {
            kind,
            severity,
            message,
        }
    }
}

/// `lhs < rhs * ratio`
pub(crate) fn below_ratio(lhs: Score, rhs: Score, ratio: f64) -> bool {
    f64::from(lhs) < f64::from(rhs) * ratio
}

lazy_static! {
    static ref SPEED_MHZ: Regex = Regex::new(r"(?i)(\d{3,5})\s*mhz").unwrap();
    static ref SPEED_DDR: Regex = Regex::new(r"(?i)ddr\d\s*-\s*(\d{3,5})").unwrap();
}

/// The memory speed quoted in the RAM finding: the catalog's figure, else one
/// read off the label (`3200MHz`, `DDR5-6000`), else `"slow"`.
pub fn ram_speed(ram: &ComponentMatch) -> String {
    if let Some(speed) = ram.attributes.get("speed") {
        return speed.clone();
    }
    SPEED_MHZ
        .captures(&ram.input)
        .or_else(|| SPEED_DDR.captures(&ram.input))
        .and_then(|caps| caps.get(1))
        .map(|m| format!("{}MHz", m.as_str()))
        .unwrap_or_else(|| "slow".to_string())
}

/// At most one CPU/GPU finding (severe before moderate, CPU before GPU), plus a RAM finding.
///
/// The CPU/GPU rules need both parts present; the RAM rule needs RAM.
pub fn identify_bottlenecks(components: &Components, thresholds: &Thresholds) -> Vec<Bottleneck> {
    let mut bottlenecks = Vec::new();

    if let (Some(cpu), Some(gpu)) = (
        components.get(&Category::Cpu),
        components.get(&Category::Gpu),
    ) {
        let finding = if below_ratio(cpu.score, gpu.score, thresholds.severe_ratio) {
            Some(Bottleneck::new(
                BottleneckKind::Cpu,
                Severity::High,
                format!(
                    "Significant CPU bottleneck: Your {} is too weak for your {}. You're leaving a lot of performance on the table.",
                    cpu.name, gpu.name
                ),
            ))
        } else if below_ratio(gpu.score, cpu.score, thresholds.severe_ratio) {
            Some(Bottleneck::new(
                BottleneckKind::Gpu,
                Severity::High,
                format!(
                    "Significant GPU bottleneck: Your {} can't keep up with your {}. A GPU upgrade would dramatically improve FPS.",
                    gpu.name, cpu.name
                ),
            ))
        } else if below_ratio(cpu.score, gpu.score, thresholds.moderate_ratio) {
            Some(Bottleneck::new(
                BottleneckKind::Cpu,
                Severity::Medium,
                "CPU limitation in CPU-intensive games like strategy titles and simulators. Expect lower FPS in these games."
                    .to_string(),
            ))
        } else if below_ratio(gpu.score, cpu.score, thresholds.moderate_ratio) {
            Some(Bottleneck::new(
                BottleneckKind::Gpu,
                Severity::Medium,
                "GPU limits performance in graphics-heavy games. Lower settings for smoother gameplay in AAA titles."
                    .to_string(),
            ))
        } else {
            None
        };
        bottlenecks.extend(finding);
    }

    if let Some(ram) = components.get(&Category::Ram) {
        if ram.score < thresholds.weak_ram_score {
            bottlenecks.push(Bottleneck::new(
                BottleneckKind::Ram,
                Severity::Low,
                format!(
                    "RAM speed/capacity ({}) may cause stuttering in modern games. 16GB 3200MHz+ recommended.",
                    ram_speed(ram)
                ),
            ));
        }
    }

    bottlenecks
}
