//! Gallery REST API: configuration, requests and response parsing.
//!
//! Nothing here performs I/O. An [`ApiRequest`] says which method, path and
//! JSON body a call needs; the browser and native clients execute it and hand
//! the raw status and body back to [`parse_response`].

use crate::error::ApiError;
use crate::models::{NewCardRequest, UpdateAvatarRequest, UpdateUserRequest};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://nomoreparties.co/v1/apf-cohort-202";
pub const BASE_URL_VAR: &str = "PLACES_API_URL";
pub const TOKEN_VAR: &str = "PLACES_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Values baked in at build time through `PLACES_API_URL` / `PLACES_API_TOKEN`.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("PLACES_API_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("PLACES_API_TOKEN").unwrap_or_default(),
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("Content-Type", "application/json"),
            ("authorization", self.token.as_str()),
        ]
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn fetch_user() -> Self {
        Self::new(Method::Get, "/users/me")
    }

    pub fn update_user(name: &str, about: &str) -> Result<Self, ApiError> {
        Self::new(Method::Patch, "/users/me").with_json(&UpdateUserRequest {
            name: name.to_string(),
            about: about.to_string(),
        })
    }

    pub fn update_avatar(url: &str) -> Result<Self, ApiError> {
        Self::new(Method::Patch, "/users/me/avatar").with_json(&UpdateAvatarRequest {
            avatar: url.to_string(),
        })
    }

    pub fn fetch_cards() -> Self {
        Self::new(Method::Get, "/cards")
    }

    pub fn add_card(name: &str, image_url: &str) -> Result<Self, ApiError> {
        Self::new(Method::Post, "/cards").with_json(&NewCardRequest {
            name: name.to_string(),
            link: image_url.to_string(),
        })
    }

    pub fn delete_card(id: &str) -> Self {
        Self::new(Method::Delete, format!("/cards/{}", id))
    }

    pub fn like_card(id: &str) -> Self {
        Self::new(Method::Put, format!("/cards/likes/{}", id))
    }

    pub fn unlike_card(id: &str) -> Self {
        Self::new(Method::Delete, format!("/cards/likes/{}", id))
    }

    /// Serialized body, if the request has one.
    pub fn body_string(&self) -> Option<String> {
        self.body.as_ref().map(|value| value.to_string())
    }
}

/// Turns a raw response into the typed body, or `Http { status }` outside 2xx.
pub fn parse_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http { status });
    }

    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessageResponse, User};

    #[test]
    fn url_joins_without_double_slashes() {
        let config = ApiConfig::new("https://api.example.com/v1/", "t");

        assert_eq!(config.url("/cards"), "https://api.example.com/v1/cards");
        assert_eq!(config.url("cards"), "https://api.example.com/v1/cards");
    }

    #[test]
    fn headers_carry_token_and_content_type() {
        let config = ApiConfig::new("https://api.example.com", "secret");

        assert_eq!(
            config.headers(),
            [("Content-Type", "application/json"), ("authorization", "secret")]
        );
    }

    #[test]
    fn requests_map_to_rest_endpoints() {
        let cases = [
            (ApiRequest::fetch_user(), Method::Get, "/users/me"),
            (ApiRequest::fetch_cards(), Method::Get, "/cards"),
            (ApiRequest::delete_card("c1"), Method::Delete, "/cards/c1"),
            (ApiRequest::like_card("c1"), Method::Put, "/cards/likes/c1"),
            (ApiRequest::unlike_card("c1"), Method::Delete, "/cards/likes/c1"),
        ];

        for (request, method, path) in cases {
            assert_eq!(request.method, method);
            assert_eq!(request.path, path);
            assert!(request.body.is_none());
        }
    }

    #[test]
    fn mutating_requests_carry_json_bodies() {
        let update = ApiRequest::update_user("Ann", "Explorer").unwrap();
        assert_eq!(update.method, Method::Patch);
        assert_eq!(
            update.body,
            Some(serde_json::json!({ "name": "Ann", "about": "Explorer" }))
        );

        let avatar = ApiRequest::update_avatar("https://example.com/a.png").unwrap();
        assert_eq!(avatar.path, "/users/me/avatar");
        assert_eq!(
            avatar.body,
            Some(serde_json::json!({ "avatar": "https://example.com/a.png" }))
        );

        let card = ApiRequest::add_card("Байкал", "https://example.com/b.jpg").unwrap();
        assert_eq!(card.method, Method::Post);
        let sent: serde_json::Value = serde_json::from_str(&card.body_string().unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({ "name": "Байкал", "link": "https://example.com/b.jpg" })
        );
    }

    #[test]
    fn non_success_status_becomes_http_error() {
        let err = parse_response::<User>(403, r#"{"message":"forbidden"}"#).unwrap_err();

        assert_eq!(err, ApiError::Http { status: 403 });
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn success_status_parses_body() {
        let message: MessageResponse =
            parse_response(200, r#"{"message":"Пост удалён"}"#).unwrap();
        assert_eq!(message.message, "Пост удалён");

        let nothing: Option<MessageResponse> = parse_response(204, "").unwrap();
        assert!(nothing.is_none());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_response::<User>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
