pub mod api;
pub mod card;
pub mod error;
pub mod modal;
pub mod models;
pub mod page;
pub mod validation;

pub use api::{parse_response, ApiConfig, ApiRequest, Method};
pub use card::{CardEntry, CardView, ImagePreview, LikeAction, LikeRequestState};
pub use error::ApiError;
pub use modal::{ClickTarget, ModalManager, Popup};
pub use models::{Card, MessageResponse, User};
pub use page::PageState;
pub use validation::{validate, Field, FormState, ValidationError, ValidationSettings};
