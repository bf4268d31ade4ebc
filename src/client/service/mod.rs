//! Narrow interfaces over the identity provider and the user document store.
//!
//! Components only see these traits through [`Backend`], so the navbar's behavior can be driven
//! by the in-memory implementations in tests and in non-web builds.

#[cfg(feature = "web")]
pub mod http;
#[cfg(any(test, not(feature = "web")))]
pub mod memory;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::{
    client::error::ClientError,
    model::user::{Role, SessionUserDto},
};

/// Identity provider: who is signed in, and signing them out.
pub trait SessionProvider {
    /// Returns the signed in user, or `None` when there is no session.
    fn current_user(&self) -> LocalBoxFuture<'_, Result<Option<SessionUserDto>, ClientError>>;

    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), ClientError>>;
}

/// Document store holding one record per user in the `users` collection.
pub trait UserRepository {
    /// Applies the partial update `{ role }` to the record keyed by `user_id`.
    fn update_role<'a>(
        &'a self,
        user_id: &'a str,
        role: Role,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>>;
}

/// Collaborators shared with components through context.
#[derive(Clone)]
pub struct Backend {
    pub session: Rc<dyn SessionProvider>,
    pub users: Rc<dyn UserRepository>,
}

impl Backend {
    pub fn new(session: Rc<dyn SessionProvider>, users: Rc<dyn UserRepository>) -> Self {
        Self { session, users }
    }
}
