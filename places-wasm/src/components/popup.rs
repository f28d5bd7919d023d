use places_core::{ClickTarget, Popup};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopupFrameProps {
    pub kind: Popup,
    pub opened: bool,
    pub on_close: Callback<Popup>,
    #[prop_or_default]
    pub children: Html,
}

/// Classifies a mouse-down on the popup: the overlay itself, the close glyph, or the content.
fn click_target(event: &MouseEvent) -> ClickTarget {
    let target = event.target();
    if target.is_some() && target == event.current_target() {
        return ClickTarget::Backdrop;
    }

    match target.and_then(|target| target.dyn_into::<Element>().ok()) {
        Some(element) if element.class_list().contains("popup__close") => ClickTarget::CloseGlyph,
        _ => ClickTarget::Content,
    }
}

#[function_component(PopupFrame)]
pub fn popup_frame(props: &PopupFrameProps) -> Html {
    let kind = props.kind;
    let onmousedown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if click_target(&e).dismisses() {
                on_close.emit(kind);
            }
        })
    };

    let content_class = match kind {
        Popup::Image => "popup__content popup__content_content_image",
        _ => "popup__content",
    };

    html! {
        <div
            class={classes!(
                "popup",
                "popup_is-animated",
                kind.type_class(),
                props.opened.then_some("popup_is-opened"),
            )}
            {onmousedown}
        >
            <div class={content_class}>
                <button type="button" class="popup__close"></button>
                { props.children.clone() }
            </div>
        </div>
    }
}
