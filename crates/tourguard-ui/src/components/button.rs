//! Button Components
//!
//! - Primary: full-width form submit
//! - Portal: large landing-page tile with title, caption and call to action
//! - Ghost: quiet text button ("Back", "Sign out")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Form submit - teal fill
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with an optional extra class list
pub(crate) fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// Clicks are swallowed while `disabled` is set, so a handler never fires
/// twice for an in-flight submission.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         disabled: portal.read().is_loading(),
///         onclick: move |_| submit(),
///         "{portal.read().register_button_label()}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = with_extra(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if props.disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the PortalTile component
#[derive(Clone, PartialEq, Props)]
pub struct PortalTileProps {
    /// Glyph shown above the title
    pub icon: String,
    /// Tile heading
    pub title: String,
    /// One-line description
    pub caption: String,
    /// Call to action, rendered with a trailing arrow
    pub action: String,
    /// Click handler
    pub onclick: EventHandler<()>,
}

/// Landing-page entry tile
#[component]
pub fn PortalTile(props: PortalTileProps) -> Element {
    rsx! {
        button {
            class: "portal-tile",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            span { class: "portal-tile-icon", "{props.icon}" }
            h3 { class: "portal-tile-title", "{props.title}" }
            p { class: "portal-tile-caption", "{props.caption}" }
            span { class: "portal-tile-action", "{props.action} \u{2192}" }
        }
    }
}
