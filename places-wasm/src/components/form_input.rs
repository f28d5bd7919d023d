use places_core::{Field, ValidationSettings};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub field: Field,
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub error: Option<AttrValue>,
    pub disabled: bool,
    pub settings: ValidationSettings,
    pub oninput: Callback<(Field, String)>,
}

fn type_modifier(field: Field) -> &'static str {
    match field {
        Field::Name => "popup__input_type_name",
        Field::Description => "popup__input_type_description",
        Field::Title => "popup__input_type_card-name",
        Field::Link => "popup__input_type_url",
        Field::Avatar => "popup__input_type_avatar",
    }
}

/// Input with its `<name>-error` slot.
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let field = props.field;
    let oninput = props.oninput.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });

    let input_type = match field {
        Field::Link | Field::Avatar => "url",
        Field::Name | Field::Description | Field::Title => "text",
    };
    let has_error = props.error.is_some();

    html! {
        <>
            <input
                class={classes!(
                    "popup__input",
                    type_modifier(field),
                    has_error.then(|| props.settings.input_error_class.clone()),
                )}
                type={input_type}
                name={field.as_str()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                required={true}
                {oninput}
            />
            <span
                id={field.error_slot_id()}
                class={classes!(
                    "popup__error",
                    has_error.then(|| props.settings.error_class.clone()),
                )}
            >
                if let Some(error) = &props.error {
                    { error.clone() }
                }
            </span>
        </>
    }
}
