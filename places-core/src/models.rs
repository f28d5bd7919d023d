use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Модели пользователей ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub about: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub about: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

// ==================== Модели карточек ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "link")]
    pub image_url: String,
    pub owner: User,
    #[serde(default)]
    pub likes: Vec<User>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Card {
    pub fn owner_id(&self) -> &str {
        &self.owner.id
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|user| user.id == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn liked_by(&self) -> impl Iterator<Item = &str> {
        self.likes.iter().map(|user| user.id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCardRequest {
    pub name: String,
    pub link: String,
}

// ==================== Общие ответы ====================

/// Body returned by `DELETE /cards/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_JSON: &str = r#"{
        "_id": "c1",
        "name": "Архыз",
        "link": "https://pictures.s3.yandex.net/frontend-developer/cards-compressed/arkhyz.jpg",
        "owner": { "_id": "u1", "name": "Jacques", "about": "Sailor", "avatar": "https://example.com/a.png", "cohort": "apf-cohort-202" },
        "likes": [
            { "_id": "u2", "name": "Ann", "about": "Explorer", "avatar": "https://example.com/b.png" }
        ],
        "createdAt": "2024-05-01T10:00:00.000Z"
    }"#;

    #[test]
    fn card_uses_server_field_names() {
        let card: Card = serde_json::from_str(CARD_JSON).unwrap();

        assert_eq!(card.id, "c1");
        assert_eq!(card.owner_id(), "u1");
        assert_eq!(card.like_count(), 1);
        assert!(card.is_liked_by("u2"));
        assert!(!card.is_liked_by("u1"));
        assert_eq!(card.liked_by().collect::<Vec<_>>(), vec!["u2"]);
        assert!(card.created_at.is_some());
    }

    #[test]
    fn card_without_likes_defaults_to_empty() {
        let json = r#"{
            "_id": "c2", "name": "Байкал", "link": "https://example.com/b.jpg",
            "owner": { "_id": "u1", "name": "J", "about": "S", "avatar": "https://example.com/a.png" }
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.like_count(), 0);
        assert!(card.created_at.is_none());
    }

    #[test]
    fn new_card_request_serializes_link() {
        let body = serde_json::to_value(NewCardRequest {
            name: "Камчатка".into(),
            link: "https://example.com/k.jpg".into(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "name": "Камчатка", "link": "https://example.com/k.jpg" })
        );
    }

    #[test]
    fn delete_response_tolerates_missing_message() {
        let response: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, MessageResponse::default());

        let response: MessageResponse =
            serde_json::from_str(r#"{"message":"Пост удалён"}"#).unwrap();
        assert_eq!(response.message, "Пост удалён");
    }
}
