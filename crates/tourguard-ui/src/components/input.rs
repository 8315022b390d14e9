//! Input Field Components
//!
//! Labelled text inputs with a leading glyph. Emergency-contact inputs use the
//! amber accent.

use dioxus::prelude::*;
use tourguard_core::RegistrationField;

use super::button::with_extra;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when Enter is pressed inside the input
    #[props(default)]
    pub onenter: Option<EventHandler<()>>,
    /// Label text
    pub label: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Leading glyph
    #[props(default)]
    pub icon: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Amber accent for emergency fields
    #[props(default = false)]
    pub warning: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// ID for label association
    pub id: String,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "login-email".to_string(),
///         label: "Email".to_string(),
///         value: portal.read().login_email().to_string(),
///         oninput: move |s| portal.write().edit_login_email(s),
///         onenter: move |_| submit_login(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let icon_class = if props.warning {
        "input-icon input-icon-warning"
    } else {
        "input-icon"
    };
    let input_class = with_extra(
        "input-field",
        props.icon.as_ref().map(|_| "input-field-with-icon"),
    );
    let onenter = props.onenter;

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "input-wrapper",
                if let Some(icon) = &props.icon {
                    span { class: "{icon_class}", "{icon}" }
                }
                input {
                    id: "{props.id}",
                    class: "{input_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            if let Some(handler) = &onenter {
                                handler.call(());
                            }
                        }
                    },
                }
            }
        }
    }
}

/// Glyph shown in front of a registration field
pub fn field_icon(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Name => "\u{1F464}",
        RegistrationField::Email => "\u{2709}",
        RegistrationField::Phone | RegistrationField::EmergencyContactPhone => "\u{260E}",
        RegistrationField::EmergencyContactName => "\u{26A0}",
    }
}

/// DOM id of a registration field's input
pub fn field_dom_id(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Name => "reg-name",
        RegistrationField::Email => "reg-email",
        RegistrationField::Phone => "reg-phone",
        RegistrationField::EmergencyContactName => "reg-emergency-name",
        RegistrationField::EmergencyContactPhone => "reg-emergency-phone",
    }
}

/// Properties for the RegistrationInput component
#[derive(Clone, PartialEq, Props)]
pub struct RegistrationInputProps {
    /// Which form field this input edits
    pub field: RegistrationField,
    /// Current value
    pub value: String,
    /// Called with the field and its new value
    pub onedit: EventHandler<(RegistrationField, String)>,
    /// Locks the field while a registration is in flight
    #[props(default = false)]
    pub disabled: bool,
}

/// Input bound to one registration form field
#[component]
pub fn RegistrationInput(props: RegistrationInputProps) -> Element {
    let field = props.field;
    let onedit = props.onedit;

    rsx! {
        Input {
            id: field_dom_id(field).to_string(),
            label: field.label().to_string(),
            placeholder: field.placeholder().to_string(),
            icon: field_icon(field).to_string(),
            input_type: field.input_type().to_string(),
            warning: field.is_emergency(),
            disabled: props.disabled,
            value: props.value,
            oninput: move |value: String| onedit.call((field, value)),
        }
    }
}
