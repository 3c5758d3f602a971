//! Asynchronous data sources around the `rigcheck-core` engine: component
//! catalog producers and the RAWG games catalog.

pub mod common;
pub mod modules;

pub use chrono;
pub use rigcheck_core;
