use std::cell::{Cell, RefCell};

use futures::future::{self, LocalBoxFuture};

use crate::{
    client::{
        error::ClientError,
        service::{SessionProvider, UserRepository},
    },
    model::user::{Role, SessionUserDto},
};

/// Session held in memory, used by non-web builds and tests.
#[derive(Default)]
pub struct MemorySession {
    user: RefCell<Option<SessionUserDto>>,
    fail_sign_out: bool,
    current_user_calls: Cell<usize>,
    sign_out_calls: Cell<usize>,
}

impl MemorySession {
    pub fn signed_in(user: SessionUserDto) -> Self {
        Self {
            user: RefCell::new(Some(user)),
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Makes every subsequent `sign_out` call fail without clearing the user.
    pub fn failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }

    pub fn user(&self) -> Option<SessionUserDto> {
        self.user.borrow().clone()
    }

    pub fn current_user_calls(&self) -> usize {
        self.current_user_calls.get()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.get()
    }
}

impl SessionProvider for MemorySession {
    fn current_user(&self) -> LocalBoxFuture<'_, Result<Option<SessionUserDto>, ClientError>> {
        self.current_user_calls.set(self.current_user_calls.get() + 1);

        Box::pin(future::ready(Ok(self.user.borrow().clone())))
    }

    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), ClientError>> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);

        let result = if self.fail_sign_out {
            Err(ClientError::Request("sign out rejected".to_string()))
        } else {
            self.user.borrow_mut().take();
            Ok(())
        };

        Box::pin(future::ready(result))
    }
}

/// User records held in memory; every accepted update is recorded in order.
#[derive(Default)]
pub struct MemoryUserRepository {
    updates: RefCell<Vec<(String, Role)>>,
    fail: bool,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every update fail with a 503 status.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<(String, Role)> {
        self.updates.borrow().clone()
    }

    /// Latest role written for `user_id`.
    pub fn role_of(&self, user_id: &str) -> Option<Role> {
        self.updates
            .borrow()
            .iter()
            .rev()
            .find(|(id, _)| id == user_id)
            .map(|(_, role)| *role)
    }
}

impl UserRepository for MemoryUserRepository {
    fn update_role<'a>(
        &'a self,
        user_id: &'a str,
        role: Role,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        let result = if self.fail {
            Err(ClientError::Status {
                status: 503,
                message: "user store unavailable".to_string(),
            })
        } else {
            self.updates.borrow_mut().push((user_id.to_string(), role));
            Ok(())
        };

        Box::pin(future::ready(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect signing out to clear the stored user
    #[tokio::test]
    async fn sign_out_clears_user() -> Result<(), ClientError> {
        let session = MemorySession::signed_in(SessionUserDto {
            id: "rider-1".to_string(),
            role: Role::Passenger,
        });

        assert!(session.current_user().await?.is_some());
        session.sign_out().await?;

        assert!(session.current_user().await?.is_none());
        assert_eq!(session.sign_out_calls(), 1);
        assert_eq!(session.current_user_calls(), 2);

        Ok(())
    }

    /// Expect the latest update to win when reading a user's role back
    #[tokio::test]
    async fn role_of_returns_latest_update() -> Result<(), ClientError> {
        let users = MemoryUserRepository::new();

        users.update_role("rider-1", Role::Driver).await?;
        users.update_role("rider-2", Role::Driver).await?;
        users.update_role("rider-1", Role::Passenger).await?;

        assert_eq!(users.role_of("rider-1"), Some(Role::Passenger));
        assert_eq!(users.role_of("rider-2"), Some(Role::Driver));
        assert_eq!(users.role_of("rider-3"), None);

        Ok(())
    }

    /// Expect a failing repository to record nothing
    #[tokio::test]
    async fn failing_repository_records_nothing() {
        let users = MemoryUserRepository::failing();

        let result = users.update_role("rider-1", Role::Driver).await;

        assert!(matches!(result, Err(ClientError::Status { status: 503, .. })));
        assert!(users.updates().is_empty());
    }
}
