//! Asynchronous navbar actions, written against the collaborator traits so they can run
//! without a browser.
//!
//! Failures are propagated to the caller untouched: nothing that already happened is rolled
//! back and nothing after the failing call runs.

use dioxus_logger::tracing;

use crate::{
    client::{
        error::ClientError,
        router::Route,
        service::{SessionProvider, UserRepository},
    },
    model::user::Role,
};

/// Dashboard a user lands on after switching to `role`.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Driver => Route::DriverDashboard {},
        Role::Passenger => Route::Dashboard {},
    }
}

/// Persists the complement of `role` for the signed in user, reports it through `set_role` and
/// navigates to the matching dashboard.
///
/// # Returns
/// - `Ok(Some(role))` - The new role after a successful switch
/// - `Ok(None)` - No user is signed in, nothing was updated
/// - `Err(ClientError)` - Session lookup or the role update failed
pub async fn toggle_role(
    role: Role,
    session: &dyn SessionProvider,
    users: &dyn UserRepository,
    mut set_role: impl FnMut(Role),
    mut navigate: impl FnMut(Route),
) -> Result<Option<Role>, ClientError> {
    let new_role = role.complement();

    let Some(user) = session.current_user().await? else {
        tracing::debug!(role = %role, "No signed in user, ignoring role switch");

        return Ok(None);
    };

    users.update_role(&user.id, new_role).await?;

    tracing::info!(user_id = %user.id, role = %new_role, "Switched user role");

    set_role(new_role);
    navigate(dashboard_for(new_role));

    Ok(Some(new_role))
}

/// Signs the user out, reports it through `signed_out`, then navigates to the sign in page.
pub async fn handle_logout(
    session: &dyn SessionProvider,
    signed_out: impl FnOnce(),
    mut navigate: impl FnMut(Route),
) -> Result<(), ClientError> {
    session.sign_out().await?;

    tracing::info!("Signed out");

    signed_out();
    navigate(Route::SignIn {});

    Ok(())
}
