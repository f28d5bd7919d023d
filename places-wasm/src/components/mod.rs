pub mod card;
pub mod form_input;
pub mod popup;
pub mod profile;

pub use card::CardItem;
pub use form_input::FormInput;
pub use popup::PopupFrame;
pub use profile::ProfileSection;
