use crate::api::ApiClient;
use crate::components::{CardItem, FormInput, PopupFrame, ProfileSection};
use gloo_events::EventListener;
use places_core::models::{Card, MessageResponse, User};
use places_core::{ApiError, ApiRequest, Field, PageState, Popup};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub enum Msg {
    // Загрузка страницы
    Loaded(Result<(User, Vec<Card>), ApiError>),

    // Popup messages
    Open(Popup),
    Close(Popup),
    KeyDown(String),
    Preview(String),
    RequestDelete(String),

    // Form messages
    Input(Popup, Field, String),
    Submit(Popup),
    ProfileSaved(Result<User, ApiError>),
    AvatarSaved(Result<User, ApiError>),
    CardCreated(Result<Card, ApiError>),
    CardDeleted(String, Result<MessageResponse, ApiError>),

    // Card messages
    ToggleLike(String),
    LikeUpdated(String, Result<Card, ApiError>),
}

pub struct App {
    page: PageState<EventListener>,
    api: ApiClient,
}

/// Registers the document-level Escape listener; dropping the guard removes it.
fn escape_listener(ctx: &Context<App>) -> impl FnOnce() -> EventListener {
    let link = ctx.link().clone();
    move || {
        EventListener::new(&gloo_utils::document(), "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                link.send_message(Msg::KeyDown(event.key()));
            }
        })
    }
}

impl App {
    /// Runs `request` off the update loop and reports back through `to_msg`.
    fn spawn_request<T, F>(&self, ctx: &Context<Self>, request: ApiRequest, to_msg: F)
    where
        T: DeserializeOwned + 'static,
        F: FnOnce(Result<T, ApiError>) -> Msg + 'static,
    {
        let api = self.api.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = api.execute(request).await;
            link.send_message(to_msg(result));
        });
    }

    fn submit(&mut self, ctx: &Context<Self>, popup: Popup) -> bool {
        match popup {
            Popup::Profile => match self.page.begin_profile_submit() {
                Some(request) => self.spawn_request(ctx, request, Msg::ProfileSaved),
                None => return false,
            },
            Popup::Avatar => match self.page.begin_avatar_submit() {
                Some(request) => self.spawn_request(ctx, request, Msg::AvatarSaved),
                None => return false,
            },
            Popup::NewCard => match self.page.begin_card_submit() {
                Some(request) => self.spawn_request(ctx, request, Msg::CardCreated),
                None => return false,
            },
            Popup::Confirm => match self.page.begin_delete() {
                Some((card_id, request)) => self.spawn_request(ctx, request, move |result| {
                    Msg::CardDeleted(card_id, result)
                }),
                None => return false,
            },
            Popup::Image => return false,
        }
        true
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = ApiClient::new();

        // Профиль и карточки запрашиваем параллельно
        {
            let api = api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let (user, cards) = futures::join!(api.fetch_user(), api.fetch_cards());
                let loaded = user.and_then(|user| cards.map(|cards| (user, cards)));
                link.send_message(Msg::Loaded(loaded));
            });
        }

        Self {
            page: PageState::new(),
            api,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok((user, cards))) => {
                self.page.load(user, cards);
                true
            }
            Msg::Loaded(Err(e)) => {
                log::error!("Failed to load profile and cards: {}", e);
                false
            }

            Msg::Open(popup) => {
                self.page.open_with(popup, escape_listener(ctx));
                true
            }
            Msg::Close(popup) => {
                self.page.close(popup);
                true
            }
            Msg::KeyDown(key) => self.page.handle_key(&key).is_some(),
            Msg::Preview(card_id) => self.page.open_preview_with(&card_id, escape_listener(ctx)),
            Msg::RequestDelete(card_id) => {
                self.page.request_delete_with(&card_id, escape_listener(ctx))
            }

            Msg::Input(popup, field, value) => {
                self.page.input(popup, field, value);
                true
            }
            Msg::Submit(popup) => self.submit(ctx, popup),
            Msg::ProfileSaved(result) => {
                self.page.finish_profile_submit(result);
                true
            }
            Msg::AvatarSaved(result) => {
                self.page.finish_avatar_submit(result);
                true
            }
            Msg::CardCreated(result) => {
                self.page.finish_card_submit(result);
                true
            }
            Msg::CardDeleted(card_id, result) => {
                self.page.finish_delete(&card_id, result);
                true
            }

            Msg::ToggleLike(card_id) => match self.page.begin_like(&card_id) {
                Some(request) => {
                    self.spawn_request(ctx, request, move |result| {
                        Msg::LikeUpdated(card_id, result)
                    });
                    true
                }
                // запрос по этой карточке уже выполняется
                None => false,
            },
            Msg::LikeUpdated(card_id, result) => {
                self.page.finish_like(&card_id, result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="page__content">
                <main class="content">
                    <ProfileSection
                        user={self.page.user().cloned()}
                        on_open={link.callback(Msg::Open)}
                    />
                    { self.view_cards(ctx) }
                </main>

                { self.view_form_popup(ctx, Popup::Profile, "Edit profile", &[
                    (Field::Name, "Name"),
                    (Field::Description, "About"),
                ]) }
                { self.view_form_popup(ctx, Popup::NewCard, "New place", &[
                    (Field::Title, "Title"),
                    (Field::Link, "Image link"),
                ]) }
                { self.view_form_popup(ctx, Popup::Avatar, "Update avatar", &[
                    (Field::Avatar, "Avatar link"),
                ]) }
                { self.view_form_popup(ctx, Popup::Confirm, "Are you sure?", &[]) }
                { self.view_image_popup(ctx) }
            </div>
        }
    }
}

impl App {
    fn view_cards(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_like = link.callback(Msg::ToggleLike);
        let on_delete = link.callback(Msg::RequestDelete);
        let on_preview = link.callback(Msg::Preview);

        html! {
            <section class="places page__section">
                <ul class="places__list">
                    { for self.page.card_views().into_iter().map(|view| {
                        let key = view.id.clone();
                        html! {
                            <CardItem
                                key={key}
                                view={view}
                                on_like={on_like.clone()}
                                on_delete={on_delete.clone()}
                                on_preview={on_preview.clone()}
                            />
                        }
                    }) }
                </ul>
            </section>
        }
    }

    fn view_form_popup(
        &self,
        ctx: &Context<Self>,
        popup: Popup,
        title: &'static str,
        fields: &[(Field, &'static str)],
    ) -> Html {
        let Some(form) = self.page.form(popup) else {
            return html! {};
        };
        let link = ctx.link();
        let settings = self.page.settings();

        let onsubmit = link.callback(move |e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit(popup)
        });
        let oninput = link.callback(move |(field, value): (Field, String)| {
            Msg::Input(popup, field, value)
        });

        let disabled = form.is_submit_disabled();

        html! {
            <PopupFrame
                kind={popup}
                opened={self.page.is_open(popup)}
                on_close={link.callback(Msg::Close)}
            >
                <h3 class="popup__title">{ title }</h3>
                <form class="popup__form" name={popup.type_class()} novalidate={true} {onsubmit}>
                    { for fields.iter().map(|(field, placeholder)| html! {
                        <FormInput
                            field={*field}
                            value={form.raw_value(*field).to_string()}
                            placeholder={*placeholder}
                            error={form.error(*field).map(|err| AttrValue::from(err.message.clone()))}
                            disabled={form.is_working()}
                            settings={settings.clone()}
                            oninput={oninput.clone()}
                        />
                    }) }
                    <button
                        type="submit"
                        class={classes!(
                            "popup__button",
                            disabled.then(|| settings.inactive_button_class.clone()),
                        )}
                        disabled={disabled}
                    >
                        { form.submit_label() }
                    </button>
                </form>
            </PopupFrame>
        }
    }

    fn view_image_popup(&self, ctx: &Context<Self>) -> Html {
        let (image_url, caption) = match self.page.preview() {
            Some(preview) => (preview.image_url.clone(), preview.caption.clone()),
            None => (String::new(), String::new()),
        };

        html! {
            <PopupFrame
                kind={Popup::Image}
                opened={self.page.is_open(Popup::Image)}
                on_close={ctx.link().callback(Msg::Close)}
            >
                <img class="popup__image" src={image_url} alt={caption.clone()} />
                <p class="popup__caption">{ caption }</p>
            </PopupFrame>
        }
    }
}
