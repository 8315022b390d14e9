//! Admin dashboard - local authority view of registered tourists.

use dioxus::prelude::*;
use tourguard_ui::{Button, ButtonVariant, ErrorBanner};

use crate::app::Route;
use crate::context::use_directory;

/// Admin dashboard page component.
#[component]
pub fn AdminDashboard() -> Element {
    let navigator = use_navigator();
    let directory = use_directory();

    if !directory.session().is_admin() {
        return rsx! {
            main { class: "page-centered",
                div { class: "card",
                    h2 { class: "section-header", "Admin session required" }
                    p { class: "muted", "Enter the dashboard from the admin portal." }
                    Link { class: "link", to: Route::Portal {}, "Go to the portal" }
                }
            }
        };
    }

    let (tourists, load_error) = match directory.list_tourists() {
        Ok(tourists) => (tourists, None),
        Err(e) => {
            tracing::error!("Failed to list tourists: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    };
    let count = tourists.len();

    let sign_out_directory = directory.clone();
    let sign_out = move |_: ()| {
        sign_out_directory.logout();
        navigator.push(Route::Portal {});
    };

    rsx! {
        main { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "Local Authority Dashboard" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: sign_out,
                    "Sign out"
                }
            }

            ErrorBanner { message: load_error }

            section { class: "card",
                h2 { class: "section-header", "Registered tourists ({count})" }
                if tourists.is_empty() {
                    p { class: "muted", "No tourists registered yet." }
                } else {
                    table { class: "tourist-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Digital ID" }
                                th { "Emergency contact" }
                            }
                        }
                        tbody {
                            for tourist in tourists.iter() {
                                tr { key: "{tourist.id}",
                                    td { "{tourist.name}" }
                                    td { "{tourist.email}" }
                                    td { class: "mono", "{tourist.digital_id}" }
                                    td { "{tourist.emergency_contact.name} ({tourist.emergency_contact.phone})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
