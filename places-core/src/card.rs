use crate::api::ApiRequest;
use crate::error::ApiError;
use crate::models::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikeRequestState {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    pub fn request(self, card_id: &str) -> ApiRequest {
        match self {
            LikeAction::Like => ApiRequest::like_card(card_id),
            LikeAction::Unlike => ApiRequest::unlike_card(card_id),
        }
    }
}

/// Image shown in the preview popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub image_url: String,
    pub caption: String,
}

/// A rendered card together with its like request state.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    card: Card,
    like_state: LikeRequestState,
}

impl CardEntry {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            like_state: LikeRequestState::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.card.id
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn like_state(&self) -> LikeRequestState {
        self.like_state
    }

    pub fn can_delete(&self, user_id: &str) -> bool {
        self.card.owner_id() == user_id
    }

    /// Starts a like toggle. Returns `None` while another one is in flight.
    pub fn begin_like(&mut self, user_id: &str) -> Option<LikeAction> {
        if self.like_state == LikeRequestState::Pending {
            return None;
        }
        self.like_state = LikeRequestState::Pending;

        if self.card.is_liked_by(user_id) {
            Some(LikeAction::Unlike)
        } else {
            Some(LikeAction::Like)
        }
    }

    /// Applies the server's answer; the card is left as it was on error.
    pub fn finish_like(&mut self, result: Result<Card, ApiError>) -> Result<(), ApiError> {
        self.like_state = LikeRequestState::Idle;
        let updated = result?;
        self.card = updated;
        Ok(())
    }

    pub fn preview(&self) -> ImagePreview {
        ImagePreview {
            image_url: self.card.image_url.clone(),
            caption: self.card.name.clone(),
        }
    }

    pub fn view(&self, user_id: &str) -> CardView {
        let pending = self.like_state == LikeRequestState::Pending;

        CardView {
            id: self.card.id.clone(),
            title: self.card.name.clone(),
            image_url: self.card.image_url.clone(),
            image_alt: self.card.name.clone(),
            like_count: self.card.like_count(),
            liked: self.card.is_liked_by(user_id),
            like_loading: pending,
            like_disabled: pending,
            show_delete: self.can_delete(user_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub like_count: usize,
    pub liked: bool,
    pub like_loading: bool,
    pub like_disabled: bool,
    pub show_delete: bool,
}

impl CardView {
    pub fn like_button_class(&self) -> String {
        let mut class = String::from("card__like-button");
        if self.liked {
            class.push_str(" card__like-button_is-active");
        }
        if self.like_loading {
            class.push_str(" card__like-button_loading");
        }
        class
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::User;

    pub(crate) fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user {}", id),
            about: "Explorer".to_string(),
            avatar_url: "https://example.com/avatar.png".to_string(),
            cohort: None,
        }
    }

    pub(crate) fn card(id: &str, owner: &str, likers: &[&str]) -> Card {
        Card {
            id: id.to_string(),
            name: "Архыз".to_string(),
            image_url: "https://example.com/arkhyz.jpg".to_string(),
            owner: user(owner),
            likes: likers.iter().map(|id| user(id)).collect(),
            created_at: None,
        }
    }

    #[test]
    fn view_reflects_like_membership() {
        let entry = CardEntry::new(card("c1", "owner", &["me", "other"]));

        let mine = entry.view("me");
        assert!(mine.liked);
        assert_eq!(mine.like_count, 2);
        assert_eq!(
            mine.like_button_class(),
            "card__like-button card__like-button_is-active"
        );

        assert!(!entry.view("stranger").liked);
    }

    #[test]
    fn delete_only_for_owner() {
        let entry = CardEntry::new(card("c1", "owner", &[]));

        assert!(entry.view("owner").show_delete);
        assert!(!entry.view("me").show_delete);
        assert!(!entry.can_delete("me"));
    }

    #[test]
    fn like_then_server_card_replaces_local_copy() {
        let mut entry = CardEntry::new(card("c1", "owner", &["other"]));

        assert_eq!(entry.begin_like("me"), Some(LikeAction::Like));
        let view = entry.view("me");
        assert!(view.like_loading && view.like_disabled);

        entry
            .finish_like(Ok(card("c1", "owner", &["other", "me"])))
            .unwrap();

        let view = entry.view("me");
        assert!(view.liked);
        assert_eq!(view.like_count, 2);
        assert!(!view.like_disabled);
        assert_eq!(entry.like_state(), LikeRequestState::Idle);
    }

    #[test]
    fn second_click_while_pending_is_ignored() {
        let mut entry = CardEntry::new(card("c1", "owner", &[]));

        assert!(entry.begin_like("me").is_some());
        assert_eq!(entry.begin_like("me"), None);
        assert_eq!(entry.like_state(), LikeRequestState::Pending);
    }

    #[test]
    fn liked_card_issues_unlike() {
        let mut entry = CardEntry::new(card("c1", "owner", &["me"]));

        let action = entry.begin_like("me").unwrap();
        assert_eq!(action, LikeAction::Unlike);
        assert_eq!(action.request("c1"), ApiRequest::unlike_card("c1"));
    }

    #[test]
    fn failed_like_keeps_card_and_unlocks_button() {
        let mut entry = CardEntry::new(card("c1", "owner", &[]));
        entry.begin_like("me");

        let err = entry
            .finish_like(Err(ApiError::Http { status: 500 }))
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        let view = entry.view("me");
        assert!(!view.liked);
        assert_eq!(view.like_count, 0);
        assert!(!view.like_disabled);
    }

    #[test]
    fn preview_uses_link_and_caption() {
        let entry = CardEntry::new(card("c1", "owner", &[]));

        assert_eq!(
            entry.preview(),
            ImagePreview {
                image_url: "https://example.com/arkhyz.jpg".to_string(),
                caption: "Архыз".to_string(),
            }
        );
    }
}
