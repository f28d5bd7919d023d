use crate::error::ClientError;
use places_core::models::{Card, MessageResponse, User};
use places_core::{parse_response, ApiConfig, ApiRequest, Method};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("places-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let url = Url::parse(&self.config.url(&request.path))?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(Self::method(request.method), url);
        for (name, value) in self.config.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body_string() {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::warn!("{} {} failed with HTTP {}", request.method, request.path, status);
        }

        Ok(parse_response(status, &text)?)
    }

    pub async fn fetch_user(&self) -> Result<User, ClientError> {
        self.execute(ApiRequest::fetch_user()).await
    }

    pub async fn update_user(&self, name: &str, about: &str) -> Result<User, ClientError> {
        self.execute(ApiRequest::update_user(name, about)?).await
    }

    pub async fn update_avatar(&self, url: &str) -> Result<User, ClientError> {
        self.execute(ApiRequest::update_avatar(url)?).await
    }

    pub async fn fetch_cards(&self) -> Result<Vec<Card>, ClientError> {
        self.execute(ApiRequest::fetch_cards()).await
    }

    pub async fn add_card(&self, name: &str, image_url: &str) -> Result<Card, ClientError> {
        self.execute(ApiRequest::add_card(name, image_url)?).await
    }

    pub async fn delete_card(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.execute(ApiRequest::delete_card(id)).await
    }

    pub async fn like_card(&self, id: &str) -> Result<Card, ClientError> {
        self.execute(ApiRequest::like_card(id)).await
    }

    pub async fn unlike_card(&self, id: &str) -> Result<Card, ClientError> {
        self.execute(ApiRequest::unlike_card(id)).await
    }
}
