pub mod catalog;
pub mod rawg;
