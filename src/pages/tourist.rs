//! Tourist home - the signed-in tourist's digital ID.

use dioxus::prelude::*;
use tourguard_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_directory;

/// Tourist home page component.
///
/// Without a tourist session, points back to the portal.
#[component]
pub fn TouristHome() -> Element {
    let navigator = use_navigator();
    let directory = use_directory();

    let tourist = match directory.current_tourist() {
        Ok(tourist) => tourist,
        Err(e) => {
            tracing::error!("Failed to load current tourist: {}", e);
            None
        }
    };

    let sign_out_directory = directory.clone();
    let sign_out = move |_: ()| {
        sign_out_directory.logout();
        navigator.push(Route::Portal {});
    };

    let Some(tourist) = tourist else {
        return rsx! {
            main { class: "page-centered",
                div { class: "card",
                    h2 { class: "section-header", "No tourist signed in" }
                    p { class: "muted", "Register or log in from the portal first." }
                    Link { class: "link", to: Route::Portal {}, "Go to the portal" }
                }
            }
        };
    };

    let registered = tourist.registered_at_display();

    rsx! {
        main { class: "page-centered",
            div { class: "card id-card",
                header { class: "card-header",
                    span { class: "card-header-icon", "\u{1FAAA}" }
                    h2 { class: "section-header", "Digital Tourist ID" }
                }
                p { class: "id-name", "{tourist.name}" }
                p { class: "id-number", "{tourist.digital_id}" }

                dl { class: "id-details",
                    dt { "Email" }
                    dd { "{tourist.email}" }
                    dt { "Phone" }
                    dd { "{tourist.phone}" }
                    dt { class: "warning-text", "Emergency contact" }
                    dd { "{tourist.emergency_contact.name} \u{00B7} {tourist.emergency_contact.phone}" }
                    dt { "Registered" }
                    dd { "{registered}" }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: sign_out,
                    "Sign out"
                }
            }
        }
    }
}
