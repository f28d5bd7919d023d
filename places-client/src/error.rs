use places_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    // Ошибки API (статус, разбор ответа)
    #[error(transparent)]
    Api(#[from] ApiError),

    // Транспортные ошибки
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    // Ошибки URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => err.status(),
            ClientError::Request(err) => err.status().map(|status| status.as_u16()),
            ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api(err) => err,
            ClientError::Request(err) => ApiError::Network(err.to_string()),
            ClientError::InvalidUrl(err) => ApiError::Network(err.to_string()),
        }
    }
}
