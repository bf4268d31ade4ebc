use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, store::role::RoleState};

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | EasyRide" }
        Page { heading: "Passenger Dashboard",
            p { class: "text-gray-700",
                "Find a ride and keep track of your trips."
            }
            SessionNotice { }
        }
    )
}

#[component]
pub fn DriverDashboard() -> Element {
    rsx!(
        Title { "Driver Dashboard | EasyRide" }
        Page { heading: "Driver Dashboard",
            p { class: "text-gray-700",
                "Offer rides and review the bookings made on them."
            }
            SessionNotice { }
        }
    )
}

/// Shown once the session lookup finished without finding a user.
#[component]
fn SessionNotice() -> Element {
    let role_state = use_context::<Signal<RoleState>>();
    let state = role_state.read();

    rsx!(
        if state.fetched && state.user_id.is_none() {
            p { class: "mt-4 text-sm text-red-600",
                "You are not signed in, switching roles is unavailable."
            }
        }
    )
}
