use dioxus::prelude::*;

use crate::client::{components::Navbar, router::Route, store::role::RoleState};

/// Owns the role state for signed in pages and renders the navbar above them.
#[component]
pub fn AppLayout() -> Element {
    let mut role_state = use_context::<Signal<RoleState>>();
    let role = role_state.read().role;

    rsx! {
        Navbar {
            role,
            on_role_change: move |action| role_state.write().reduce(action),
        }

        Outlet::<Route> {}
    }
}
