use places_core::{Popup, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileSectionProps {
    pub user: Option<User>,
    pub on_open: Callback<Popup>,
}

#[function_component(ProfileSection)]
pub fn profile_section(props: &ProfileSectionProps) -> Html {
    let open = |popup: Popup| props.on_open.reform(move |_: MouseEvent| popup);

    let (name, about, avatar_style) = match &props.user {
        Some(user) => (
            user.name.clone(),
            user.about.clone(),
            format!("background-image: url({})", user.avatar_url),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    html! {
        <section class="profile page__section">
            <div class="profile__image" style={avatar_style} onclick={open(Popup::Avatar)}></div>
            <div class="profile__info">
                <h1 class="profile__title">{ name }</h1>
                <button type="button" class="profile__edit-button" onclick={open(Popup::Profile)}></button>
                <p class="profile__description">{ about }</p>
            </div>
            <button type="button" class="profile__add-button" onclick={open(Popup::NewCard)}></button>
        </section>
    }
}
