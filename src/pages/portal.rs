//! Portal page - Entry point to Tourguard.
//!
//! Landing hero with two tiles. "Tourist Portal" opens the register/login
//! card in place; "Admin Portal" signs in as admin and leaves for `/admin`.
//! All state lives in a [`PortalController`]; this page only renders it and
//! forwards events.

use dioxus::prelude::*;
use tourguard_core::{
    PortalController, PortalKey, RegistrationField, TouristDirectory, ViewMode, DEMO_EMAIL,
};
use tourguard_ui::{Button, ButtonVariant, ErrorBanner, Input, PortalTile, RegistrationInput, Tabs};

use crate::app::route_for;
use crate::context::use_directory;

/// Portal page component.
#[component]
pub fn Portal() -> Element {
    let navigator = use_navigator();
    let directory = use_directory();
    let mut portal = use_signal(PortalController::new);

    let admin_directory = directory.clone();
    let enter_admin = move |_: ()| {
        let nav = portal.write().select_admin_portal(&*admin_directory);
        navigator.push(route_for(nav));
    };

    let register_directory = directory.clone();
    let submit_registration = move |_: ()| {
        let Some(form) = portal.write().begin_registration() else {
            return;
        };
        let directory = register_directory.clone();
        spawn(async move {
            let result = directory.register_tourist(form).await;
            let nav = portal.write().finish_registration(result);
            if let Some(nav) = nav {
                navigator.push(route_for(nav));
            }
        });
    };

    let login_directory = directory.clone();
    let submit_login = move |_: ()| {
        let nav = portal.write().submit_login(&*login_directory);
        if let Some(nav) = nav {
            navigator.push(route_for(nav));
        }
    };

    let enter_directory = directory.clone();
    let on_email_enter = move |_: ()| {
        let nav = portal.write().key_down(PortalKey::Enter, &*enter_directory);
        if let Some(nav) = nav {
            navigator.push(route_for(nav));
        }
    };

    let state = portal();
    let error = state.error().map(|e| e.to_string());
    let active_tab = if state.mode() == ViewMode::TouristLogin { 1 } else { 0 };
    let register_label = state.register_button_label();

    rsx! {
        main { class: "portal",
            div { class: "portal-backdrop" }

            if state.mode().is_tourist_form() {
                section { class: "tourist-card-wrapper",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| portal.write().back(),
                        "\u{2190} Back"
                    }

                    div { class: "card",
                        header { class: "card-header",
                            span { class: "card-header-icon", "\u{1F9ED}" }
                            h2 { class: "section-header", "Tourist Portal" }
                        }

                        Tabs {
                            labels: vec!["Register".to_string(), "Login".to_string()],
                            active: active_tab,
                            onselect: move |index: usize| {
                                if index == 0 {
                                    portal.write().select_register_tab();
                                } else {
                                    portal.write().select_login_tab();
                                }
                            },
                        }

                        ErrorBanner { message: error }

                        if state.mode() == ViewMode::TouristRegister {
                            div { class: "form-stack",
                                for field in RegistrationField::ALL {
                                    RegistrationInput {
                                        key: "{field:?}",
                                        field: field,
                                        value: state.registration().get(field).to_string(),
                                        disabled: state.is_loading(),
                                        onedit: move |(field, value): (RegistrationField, String)| {
                                            portal.write().edit_registration(field, value);
                                        },
                                    }
                                }
                                Button {
                                    class: "btn-wide".to_string(),
                                    disabled: !state.can_submit_registration(),
                                    onclick: submit_registration,
                                    "{register_label}"
                                }
                            }
                        } else {
                            div { class: "form-stack",
                                Input {
                                    id: "login-email".to_string(),
                                    label: "Email".to_string(),
                                    placeholder: "john@example.com".to_string(),
                                    icon: "\u{2709}".to_string(),
                                    input_type: "email".to_string(),
                                    value: state.login_email().to_string(),
                                    oninput: move |value: String| portal.write().edit_login_email(value),
                                    onenter: on_email_enter,
                                }
                                Button {
                                    class: "btn-wide".to_string(),
                                    onclick: submit_login,
                                    "Login"
                                }
                                p { class: "demo-hint",
                                    "Demo: try "
                                    span { class: "demo-email", "{DEMO_EMAIL}" }
                                }
                            }
                        }
                    }
                }
            } else {
                header { class: "hero",
                    div { class: "hero-badge", "\u{1F6E1}" }
                    h1 { class: "page-title",
                        "Smart Tourist Safety"
                        span { class: "page-title-accent", "Monitoring System" }
                    }
                    p { class: "tagline",
                        "Real-time monitoring, automated incident detection, geo-fencing, "
                        "and blockchain-verified digital identity for tourist safety."
                    }

                    div { class: "portal-tiles",
                        PortalTile {
                            icon: "\u{1F9ED}".to_string(),
                            title: "Tourist Portal".to_string(),
                            caption: "Register or login as a tourist".to_string(),
                            action: "Get Started".to_string(),
                            onclick: move |_| portal.write().select_tourist_portal(),
                        }
                        PortalTile {
                            icon: "\u{2699}".to_string(),
                            title: "Admin Portal".to_string(),
                            caption: "Local authority dashboard".to_string(),
                            action: "Enter Dashboard".to_string(),
                            onclick: enter_admin,
                        }
                    }
                }
            }
        }
    }
}
