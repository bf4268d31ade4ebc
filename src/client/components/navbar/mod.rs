pub mod actions;
pub mod drawer;
pub mod in_flight;
pub mod links;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{service::Backend, store::role::RoleAction},
    model::user::Role,
};

use actions::{handle_logout, toggle_role};
use drawer::{switch_from_drawer, DrawerState};
use in_flight::{run_exclusive, InFlight};
use links::{nav_links, switch_label};

/// Site header with role aware links and a drawer duplicating them on narrow screens.
///
/// Role changes are reported to the owner of the role state through `on_role_change`.
#[component]
pub fn Navbar(role: Role, on_role_change: EventHandler<RoleAction>) -> Element {
    let backend = use_context::<Backend>();
    let nav = navigator();
    let mut drawer = use_signal(DrawerState::default);
    let flight = use_signal(InFlight::default);
    let busy = flight.read().is_busy();

    let links = nav_links(role);
    let label = switch_label(role);

    let switch_backend = backend.clone();
    let drawer_backend = backend.clone();
    let logout_backend = backend;

    rsx! {
        header {
            class: "bg-white shadow",
            div {
                class: "px-4 py-6 mx-auto max-w-7xl sm:px-6 lg:px-8 flex justify-between items-center",
                div {
                    class: "flex items-center",
                    button {
                        class: "text-gray-500 focus:outline-none lg:hidden",
                        "aria-label": "Open menu",
                        onclick: move |_| toggle_drawer(&mut drawer),
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaBars
                        }
                    }
                    span { class: "text-3xl font-bold text-gray-900 ml-4 lg:ml-0",
                        "EasyRide"
                    }
                    nav {
                        class: "hidden lg:flex items-center ml-8",
                        for link in links.iter() {
                            Link {
                                key: "{link.label}",
                                to: link.to.clone(),
                                class: "mr-4 text-blue-500 hover:underline",
                                "{link.label}"
                            }
                        }
                        button {
                            class: "ml-4 px-4 py-2 text-white bg-blue-500 rounded-md hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-500",
                            disabled: busy,
                            onclick: move |_| {
                                spawn_role_switch(role, switch_backend.clone(), flight, on_role_change, nav)
                            },
                            "{label}"
                        }
                    }
                }
                button {
                    class: "ml-4 px-4 py-2 text-white bg-red-500 rounded-md hover:bg-red-600 focus:outline-none focus:ring-2 focus:ring-red-500",
                    disabled: busy,
                    onclick: move |_| spawn_logout(logout_backend.clone(), flight, on_role_change, nav),
                    "Logout"
                }
            }
            if drawer.read().is_open() {
                div {
                    class: "lg:hidden",
                    div { class: "fixed inset-0 bg-gray-600 bg-opacity-75" }
                    div {
                        class: "fixed inset-y-0 left-0 flex max-w-full",
                        div {
                            class: "w-64 bg-white shadow-xl",
                            div {
                                class: "px-4 py-6",
                                button {
                                    class: "text-gray-500 focus:outline-none",
                                    "aria-label": "Close menu",
                                    onclick: move |_| toggle_drawer(&mut drawer),
                                    Icon {
                                        width: 24,
                                        height: 24,
                                        icon: FaXmark
                                    }
                                }
                                nav {
                                    class: "mt-6",
                                    for link in links.iter() {
                                        Link {
                                            key: "{link.label}",
                                            to: link.to.clone(),
                                            class: "block px-4 py-2 text-blue-500 hover:underline",
                                            onclick: move |_| drawer.write().close(),
                                            "{link.label}"
                                        }
                                    }
                                    button {
                                        class: "block w-full text-left px-4 py-2 text-white bg-blue-500 rounded-md hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-500",
                                        disabled: busy,
                                        onclick: move |_| {
                                            let backend = drawer_backend.clone();
                                            switch_from_drawer(&mut drawer.write(), || {
                                                spawn_role_switch(role, backend, flight, on_role_change, nav)
                                            });
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn toggle_drawer(drawer: &mut Signal<DrawerState>) {
    drawer.write().toggle();

    tracing::debug!(open = drawer.read().is_open(), "Toggled navbar drawer");
}

/// Runs [`toggle_role`] on the component's scope unless another navbar action is in flight.
fn spawn_role_switch(
    role: Role,
    backend: Backend,
    mut flight: Signal<InFlight>,
    on_role_change: EventHandler<RoleAction>,
    nav: Navigator,
) {
    spawn(async move {
        let result = run_exclusive(
            move || flight.write().try_start(),
            move || flight.write().finish(),
            toggle_role(
                role,
                backend.session.as_ref(),
                backend.users.as_ref(),
                |new_role| on_role_change.call(RoleAction::Switched(new_role)),
                |route| {
                    nav.push(route);
                },
            ),
        )
        .await;

        match result {
            Some(Ok(_)) => (),
            Some(Err(err)) => tracing::error!("Failed to switch role: {}", err),
            None => tracing::debug!("Navbar action already in flight, ignoring role switch"),
        }
    });
}

/// Runs [`handle_logout`] on the component's scope unless another navbar action is in flight.
fn spawn_logout(
    backend: Backend,
    mut flight: Signal<InFlight>,
    on_role_change: EventHandler<RoleAction>,
    nav: Navigator,
) {
    spawn(async move {
        let result = run_exclusive(
            move || flight.write().try_start(),
            move || flight.write().finish(),
            handle_logout(
                backend.session.as_ref(),
                || on_role_change.call(RoleAction::SignedOut),
                |route| {
                    nav.push(route);
                },
            ),
        )
        .await;

        match result {
            Some(Ok(())) => (),
            Some(Err(err)) => tracing::error!("Failed to sign out: {}", err),
            None => tracing::debug!("Navbar action already in flight, ignoring logout"),
        }
    });
}
