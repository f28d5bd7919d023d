use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // Ответ с кодом вне 2xx
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    // Транспортные ошибки
    #[error("Network error: {0}")]
    Network(String),

    // Ошибки десериализации ответа
    #[error("Failed to parse response: {0}")]
    Parse(String),

    // Ошибки сериализации запроса
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
