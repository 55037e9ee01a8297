use thiserror::Error;

#[derive(Error, Debug)]
pub enum LojinhaError {
    #[error("Produto não encontrado: {0}")]
    ProductNotFound(String),

    #[error("Cliente não encontrado: {0}")]
    CustomerNotFound(String),

    #[error("Estoque insuficiente! Apenas {available} disponíveis.")]
    InsufficientStock { available: i64 },

    #[error("Entrada inválida: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LojinhaError>;
