//! Deterministic gaming-performance estimates for PC builds.
//!
//! Free-text component labels are resolved against a tiered [`Catalog`],
//! graded, and turned into FPS buckets, bottleneck findings and upgrade
//! advice. Everything here is synchronous and free of I/O.

pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod modules;
pub mod schemas;

pub use config::{EngineConfig, MissingComponentPolicy, Thresholds, Weights};
pub use engine::{Engine, PcSpecs};
pub use error::{EngineError, EngineResult};
pub use modules::{catalog::Catalog, compatibility::GameProfile};
pub use schemas::computing::{Category, Component, ComponentId, Score, Tier};
