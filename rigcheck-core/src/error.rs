use thiserror::Error;

use crate::schemas::computing::Category;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("missing required components: {}", join(.0))]
    PartialSpec(Vec<Category>),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown component category `{0}`")]
    UnknownCategory(String),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn join(categories: &[Category]) -> String {
    categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type EngineResult<T> = Result<T, EngineError>;
