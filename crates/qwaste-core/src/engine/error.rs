use crate::core::forest::model::ModelError;
use crate::core::models::chain::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Chain assembly failed: {source}")]
    Chain {
        #[from]
        source: ChainError,
    },

    #[error("Difficulty model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
