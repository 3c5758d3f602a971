use serde::Serialize;

use crate::{
    common::round_half_up,
    config::Thresholds,
    modules::bottleneck::below_ratio,
    schemas::{
        computing::{Score, MAX_SCORE},
        report::ComponentMatch,
    },
};

/// Which side of a CPU/GPU pair limits the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Limiter {
    Cpu,
    Gpu,
    None,
}

impl Limiter {
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU Limited",
            Self::Gpu => "GPU Limited",
            Self::None => "Balanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pairing {
    pub balance: Score,
    pub verdict: &'static str,
    pub bottleneck: Limiter,
}

impl Pairing {
    pub fn new(cpu: Score, gpu: Score, thresholds: &Thresholds) -> Self {
        let balance = round_half_up((f64::from(cpu) + f64::from(gpu)) / 2.0) as Score;
        let bottleneck = if below_ratio(cpu, gpu, thresholds.pairing_ratio) {
            Limiter::Cpu
        } else if below_ratio(gpu, cpu, thresholds.pairing_ratio) {
            Limiter::Gpu
        } else {
            Limiter::None
        };
        Self {
            balance,
            verdict: bottleneck.verdict(),
            bottleneck,
        }
    }

    /// Only one side of the pair is known: nothing to compare, so nothing limits.
    pub fn unpaired(score: Score) -> Self {
        Self {
            balance: score,
            verdict: Limiter::None.verdict(),
            bottleneck: Limiter::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingGrade {
    Excellent,
    Good,
    Average,
}

impl PairingGrade {
    pub fn from_balance(balance: Score) -> Self {
        match balance {
            b if b >= 80 => Self::Excellent,
            b if b >= 60 => Self::Good,
            _ => Self::Average,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsportPairing {
    pub balance_score: Score,
    pub performance: PairingGrade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AaaPairing {
    pub balance_score: Score,
    pub bottleneck: Limiter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingByCategory {
    pub esport: EsportPairing,
    pub aaa_gpu: AaaPairing,
}

/// A CPU/GPU pair looked at on its own, without RAM or storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingAnalysis {
    pub cpu: ComponentMatch,
    pub gpu: ComponentMatch,
    pub overall_balance_score: Score,
    pub overall_verdict: &'static str,
    pub bottleneck: Limiter,
    pub by_category: PairingByCategory,
}

impl PairingAnalysis {
    pub fn new(cpu: ComponentMatch, gpu: ComponentMatch, thresholds: &Thresholds) -> Self {
        let pairing = Pairing::new(cpu.score, gpu.score, thresholds);
        let by_category = PairingByCategory {
            esport: EsportPairing {
                balance_score: pairing.balance.saturating_add(5).min(MAX_SCORE),
                performance: PairingGrade::from_balance(pairing.balance),
            },
            aaa_gpu: AaaPairing {
                balance_score: pairing.balance.saturating_sub(5),
                bottleneck: pairing.bottleneck,
            },
        };
        Self {
            cpu,
            gpu,
            overall_balance_score: pairing.balance,
            overall_verdict: pairing.verdict,
            bottleneck: pairing.bottleneck,
            by_category,
        }
    }

    pub fn pairing(&self) -> Pairing {
        Pairing {
            balance: self.overall_balance_score,
            verdict: self.overall_verdict,
            bottleneck: self.bottleneck,
        }
    }
}
