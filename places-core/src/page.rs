//! Gallery page state.
//!
//! `PageState` is the view-model behind the whole page: the cached user, the
//! rendered cards, the popup forms and the modal manager. Every interaction is
//! split in two synchronous halves. `begin_*` checks guards, flips the
//! relevant state to in-flight and hands back the [`ApiRequest`] to run;
//! `finish_*` takes the response and applies it. The async glue in between
//! lives in the web app.

use crate::api::ApiRequest;
use crate::card::{CardEntry, CardView, ImagePreview};
use crate::error::ApiError;
use crate::modal::{ModalManager, Popup};
use crate::models::{Card, MessageResponse, User};
use crate::validation::{Field, FormState, ValidationError, ValidationSettings};

pub struct PageState<G = ()> {
    user: Option<User>,
    cards: Vec<CardEntry>,
    modal: ModalManager<Popup, G>,
    profile_form: FormState,
    avatar_form: FormState,
    card_form: FormState,
    confirm_form: FormState,
    preview: Option<ImagePreview>,
    pending_delete: Option<String>,
    settings: ValidationSettings,
}

impl<G> PageState<G> {
    pub fn new() -> Self {
        Self {
            user: None,
            cards: Vec::new(),
            modal: ModalManager::new(),
            profile_form: FormState::new(&[Field::Name, Field::Description]),
            avatar_form: FormState::new(&[Field::Avatar]),
            card_form: FormState::new(&[Field::Title, Field::Link]),
            confirm_form: FormState::new(&[]).with_labels("Yes", "Deleting..."),
            preview: None,
            pending_delete: None,
            settings: ValidationSettings::default(),
        }
    }

    // ==================== Данные ====================

    /// Initial data, in server order.
    pub fn load(&mut self, user: User, cards: Vec<Card>) {
        log::debug!("Loaded profile {} with {} cards", user.id, cards.len());
        self.user = Some(user);
        self.cards = cards.into_iter().map(CardEntry::new).collect();
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_user_id(&self) -> &str {
        self.user.as_ref().map(|user| user.id.as_str()).unwrap_or("")
    }

    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    pub fn card_views(&self) -> Vec<CardView> {
        let user_id = self.current_user_id();
        self.cards.iter().map(|entry| entry.view(user_id)).collect()
    }

    fn card_mut(&mut self, card_id: &str) -> Option<&mut CardEntry> {
        self.cards.iter_mut().find(|entry| entry.id() == card_id)
    }

    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    // ==================== Попапы ====================

    pub fn open_popup(&self) -> Option<Popup> {
        self.modal.current()
    }

    pub fn is_open(&self, popup: Popup) -> bool {
        self.modal.is_open(popup)
    }

    pub fn has_escape_listener(&self) -> bool {
        self.modal.has_escape_listener()
    }

    pub fn form(&self, popup: Popup) -> Option<&FormState> {
        match popup {
            Popup::Profile => Some(&self.profile_form),
            Popup::Avatar => Some(&self.avatar_form),
            Popup::NewCard => Some(&self.card_form),
            Popup::Confirm => Some(&self.confirm_form),
            Popup::Image => None,
        }
    }

    fn form_mut(&mut self, popup: Popup) -> Option<&mut FormState> {
        match popup {
            Popup::Profile => Some(&mut self.profile_form),
            Popup::Avatar => Some(&mut self.avatar_form),
            Popup::NewCard => Some(&mut self.card_form),
            Popup::Confirm => Some(&mut self.confirm_form),
            Popup::Image => None,
        }
    }

    /// Opens a popup, preparing its form first.
    pub fn open_with(&mut self, popup: Popup, listen: impl FnOnce() -> G) {
        match popup {
            Popup::Profile => {
                if let Some(user) = &self.user {
                    self.profile_form.prefill(Field::Name, user.name.clone());
                    self.profile_form.prefill(Field::Description, user.about.clone());
                }
            }
            Popup::NewCard => self.card_form.reset(),
            Popup::Avatar | Popup::Image | Popup::Confirm => {}
        }

        self.modal.open_with(popup, listen);
    }

    /// Opens the image popup for a card.
    pub fn open_preview_with(&mut self, card_id: &str, listen: impl FnOnce() -> G) -> bool {
        let Some(preview) = self
            .cards
            .iter()
            .find(|entry| entry.id() == card_id)
            .map(CardEntry::preview)
        else {
            return false;
        };

        self.preview = Some(preview);
        self.modal.open_with(Popup::Image, listen);
        true
    }

    /// Opens the delete confirmation for a card the current user owns.
    pub fn request_delete_with(&mut self, card_id: &str, listen: impl FnOnce() -> G) -> bool {
        let user_id = self.current_user_id().to_string();
        let owned = self
            .cards
            .iter()
            .any(|entry| entry.id() == card_id && entry.can_delete(&user_id));
        if !owned {
            log::warn!("Ignoring delete request for card {} not owned by {}", card_id, user_id);
            return false;
        }

        self.pending_delete = Some(card_id.to_string());
        self.modal.open_with(Popup::Confirm, listen);
        true
    }

    /// Closes a popup and hides any validation messages left on its form.
    pub fn close(&mut self, popup: Popup) -> bool {
        if let Some(form) = self.form_mut(popup) {
            form.clear_errors();
        }
        if popup == Popup::Confirm {
            self.pending_delete = None;
        }
        self.modal.close(popup)
    }

    pub fn handle_key(&mut self, key: &str) -> Option<Popup> {
        let popup = self.modal.current()?;
        if self.modal.handle_key(key).is_some() {
            self.close(popup);
            Some(popup)
        } else {
            None
        }
    }

    // ==================== Формы ====================

    pub fn input(
        &mut self,
        popup: Popup,
        field: Field,
        value: impl Into<String>,
    ) -> Option<&ValidationError> {
        self.form_mut(popup)?.input(field, value)
    }

    fn begin_submit(
        &mut self,
        popup: Popup,
        build: impl FnOnce(&FormState) -> Result<ApiRequest, ApiError>,
    ) -> Option<ApiRequest> {
        let form = self.form_mut(popup)?;
        if !form.begin_submit() {
            return None;
        }

        match build(form) {
            Ok(request) => Some(request),
            Err(err) => {
                form.finish_submit();
                log::error!("Failed to build {:?} request: {}", popup, err);
                None
            }
        }
    }

    fn finish_submit(&mut self, popup: Popup) {
        if let Some(form) = self.form_mut(popup) {
            form.finish_submit();
        }
    }

    pub fn begin_profile_submit(&mut self) -> Option<ApiRequest> {
        self.begin_submit(Popup::Profile, |form| {
            ApiRequest::update_user(form.value(Field::Name), form.value(Field::Description))
        })
    }

    pub fn finish_profile_submit(&mut self, result: Result<User, ApiError>) -> bool {
        self.finish_submit(Popup::Profile);
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.close(Popup::Profile);
                true
            }
            Err(err) => {
                log::error!("Failed to update profile: {}", err);
                false
            }
        }
    }

    pub fn begin_avatar_submit(&mut self) -> Option<ApiRequest> {
        self.begin_submit(Popup::Avatar, |form| {
            ApiRequest::update_avatar(form.value(Field::Avatar))
        })
    }

    pub fn finish_avatar_submit(&mut self, result: Result<User, ApiError>) -> bool {
        self.finish_submit(Popup::Avatar);
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.avatar_form.reset();
                self.close(Popup::Avatar);
                true
            }
            Err(err) => {
                log::error!("Failed to update avatar: {}", err);
                false
            }
        }
    }

    pub fn begin_card_submit(&mut self) -> Option<ApiRequest> {
        self.begin_submit(Popup::NewCard, |form| {
            ApiRequest::add_card(form.value(Field::Title), form.value(Field::Link))
        })
    }

    pub fn finish_card_submit(&mut self, result: Result<Card, ApiError>) -> bool {
        self.finish_submit(Popup::NewCard);
        match result {
            Ok(card) => {
                self.cards.insert(0, CardEntry::new(card));
                self.card_form.reset();
                self.close(Popup::NewCard);
                true
            }
            Err(err) => {
                log::error!("Failed to create card: {}", err);
                false
            }
        }
    }

    /// Starts deleting the card awaiting confirmation.
    pub fn begin_delete(&mut self) -> Option<(String, ApiRequest)> {
        let card_id = self.pending_delete.clone()?;
        let request = self.begin_submit(Popup::Confirm, |_| Ok(ApiRequest::delete_card(&card_id)))?;
        Some((card_id, request))
    }

    pub fn finish_delete(
        &mut self,
        card_id: &str,
        result: Result<MessageResponse, ApiError>,
    ) -> bool {
        self.finish_submit(Popup::Confirm);
        match result {
            Ok(_) => {
                self.cards.retain(|entry| entry.id() != card_id);
                self.close(Popup::Confirm);
                true
            }
            Err(err) => {
                log::error!("Failed to delete card {}: {}", card_id, err);
                false
            }
        }
    }

    // ==================== Лайки ====================

    pub fn begin_like(&mut self, card_id: &str) -> Option<ApiRequest> {
        let user_id = self.current_user_id().to_string();
        let entry = self.card_mut(card_id)?;
        let action = entry.begin_like(&user_id)?;
        Some(action.request(card_id))
    }

    pub fn finish_like(&mut self, card_id: &str, result: Result<Card, ApiError>) -> bool {
        let Some(entry) = self.card_mut(card_id) else {
            log::debug!("Like response for card {} that is no longer shown", card_id);
            return false;
        };

        match entry.finish_like(result) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to update like on card {}: {}", card_id, err);
                false
            }
        }
    }
}

impl PageState<()> {
    pub fn open(&mut self, popup: Popup) {
        self.open_with(popup, || ());
    }

    pub fn open_preview(&mut self, card_id: &str) -> bool {
        self.open_preview_with(card_id, || ())
    }

    pub fn request_delete(&mut self, card_id: &str) -> bool {
        self.request_delete_with(card_id, || ())
    }
}

impl<G> Default for PageState<G> {
    fn default() -> Self {
        Self::new()
    }
}
