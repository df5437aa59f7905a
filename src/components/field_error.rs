use yew::prelude::*;

use crate::utils::FormErrors;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub errors: FormErrors,
    pub field: &'static str,
}

/// Inline message under an input; renders nothing while the field is valid
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match props.errors.get(props.field) {
        Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
        None => html! {},
    }
}
