pub mod analyze;
pub mod components;
pub mod games;
