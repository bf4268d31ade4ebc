use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::ClientConfig,
    router::Route,
    service::Backend,
    store::role::{RoleAction, RoleState},
};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(ClientConfig::from_env);
    let backend = use_context_provider(|| build_backend(&config));
    let mut role_state = use_context_provider(|| Signal::new(RoleState::default()));

    // Load the signed in user's role once on startup
    use_future(move || {
        let backend = backend.clone();
        async move {
            match backend.session.current_user().await {
                Ok(user) => role_state.write().reduce(RoleAction::Loaded(user)),
                Err(err) => {
                    tracing::error!("Failed to load current user: {}", err);
                    role_state.write().reduce(RoleAction::Loaded(None));
                }
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(feature = "web")]
fn build_backend(config: &ClientConfig) -> Backend {
    use crate::client::service::http::{HttpSession, HttpUserRepository};

    tracing::debug!(api_url = %config.api_url, "Using HTTP backend");

    Backend::new(
        Rc::new(HttpSession::new(config.clone())),
        Rc::new(HttpUserRepository::new(config.clone())),
    )
}

#[cfg(not(feature = "web"))]
fn build_backend(config: &ClientConfig) -> Backend {
    use crate::{
        client::service::memory::{MemorySession, MemoryUserRepository},
        model::user::{Role, SessionUserDto},
    };

    tracing::warn!(
        api_url = %config.api_url,
        "Built without the web feature, using an in-memory backend"
    );

    Backend::new(
        Rc::new(MemorySession::signed_in(SessionUserDto {
            id: "local".to_string(),
            role: Role::Passenger,
        })),
        Rc::new(MemoryUserRepository::new()),
    )
}
