use std::sync::Arc;

use dioxus::prelude::*;
use tourguard_core::{Directory, Navigation};

use crate::context::{get_directory_config, DirectoryHandle};
use crate::pages::{AdminDashboard, Portal, TouristHome};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the tourist and admin portals
/// - `/tourist` - Digital ID of the signed-in tourist
/// - `/admin` - Local authority dashboard
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Portal {},
    #[route("/tourist")]
    TouristHome {},
    #[route("/admin")]
    AdminDashboard {},
}

/// Route for a portal navigation result
pub fn route_for(navigation: Navigation) -> Route {
    match navigation {
        Navigation::Tourist => Route::TouristHome {},
        Navigation::Admin => Route::AdminDashboard {},
    }
}

/// Root application component.
///
/// Opens the tourist directory, then provides it to the router.
#[component]
pub fn App() -> Element {
    let directory: Signal<Result<DirectoryHandle, String>> = use_signal(|| {
        Directory::open(&get_directory_config())
            .map(|dir| DirectoryHandle(Arc::new(dir)))
            .map_err(|e| {
                tracing::error!("Failed to open tourist directory: {}", e);
                e.to_string()
            })
    });

    let body = match directory() {
        Ok(handle) => rsx! {
            DirectoryProvider { directory: handle }
        },
        Err(message) => rsx! {
            main { class: "startup-failure",
                h1 { class: "page-title", "Tourguard could not start" }
                p { class: "muted", "{message}" }
            }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {body}
    }
}

/// Makes the directory available to every routed page.
#[component]
fn DirectoryProvider(directory: DirectoryHandle) -> Element {
    use_context_provider(|| directory);

    rsx! {
        Router::<Route> {}
    }
}
