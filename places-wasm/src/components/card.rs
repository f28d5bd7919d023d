use places_core::CardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardItemProps {
    pub view: CardView,
    pub on_like: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_preview: Callback<String>,
}

/// One photo card. The delete control is only rendered for the owner.
#[function_component(CardItem)]
pub fn card_item(props: &CardItemProps) -> Html {
    let view = &props.view;
    let id = view.id.clone();

    let on_preview = {
        let id = id.clone();
        props.on_preview.reform(move |_: MouseEvent| id.clone())
    };
    let on_like = {
        let id = id.clone();
        props.on_like.reform(move |_: MouseEvent| id.clone())
    };
    let on_delete = props.on_delete.reform(move |_: MouseEvent| id.clone());

    html! {
        <li class="places__item card">
            <img
                class="card__image"
                src={view.image_url.clone()}
                alt={view.image_alt.clone()}
                onclick={on_preview}
            />
            if view.show_delete {
                <button type="button" class="card__delete-button" onclick={on_delete}></button>
            }
            <div class="card__description">
                <h2 class="card__title">{ &view.title }</h2>
                <div class="card__like-container">
                    <button
                        type="button"
                        class={view.like_button_class()}
                        disabled={view.like_disabled}
                        onclick={on_like}
                    ></button>
                    <span class="card__like-count">{ view.like_count }</span>
                </div>
            </div>
        </li>
    }
}
