use gloo_net::http::{Request, RequestBuilder};
use places_core::models::{Card, User};
use places_core::{parse_response, ApiConfig, ApiError, ApiRequest, Method};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            config: ApiConfig::from_build_env(),
        }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.config.url(&request.path);

        // Создаем базовый запрос в зависимости от метода
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };

        // Добавляем заголовки
        self.config
            .headers()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }

    /// Runs one request; the response body is parsed only for 2xx statuses.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        log::debug!("{} {}", request.method, request.path);
        let builder = self.builder(&request);

        let response = match request.body_string() {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        parse_response(status, &text)
    }

    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        self.execute(ApiRequest::fetch_user()).await
    }

    pub async fn fetch_cards(&self) -> Result<Vec<Card>, ApiError> {
        self.execute(ApiRequest::fetch_cards()).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
