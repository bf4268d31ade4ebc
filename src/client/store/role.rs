use crate::model::user::{Role, SessionUserDto};

/// Role state owned by the application layout and handed down to the navbar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleState {
    pub role: Role,
    pub user_id: Option<String>,
    /// Whether the initial session lookup has completed.
    pub fetched: bool,
}

/// Mutation requests sent to the owner of [`RoleState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleAction {
    /// Result of the initial session lookup.
    Loaded(Option<SessionUserDto>),
    /// The user's role was persisted as the given value.
    Switched(Role),
    /// The session ended. The role is left as it was.
    SignedOut,
}

impl RoleState {
    pub fn reduce(&mut self, action: RoleAction) {
        match action {
            RoleAction::Loaded(Some(user)) => {
                self.role = user.role;
                self.user_id = Some(user.id);
                self.fetched = true;
            }
            RoleAction::Loaded(None) | RoleAction::SignedOut => {
                self.user_id = None;
                self.fetched = true;
            }
            RoleAction::Switched(role) => self.role = role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the loaded user's role to replace the default
    #[test]
    fn loaded_user_sets_role() {
        let mut state = RoleState::default();
        assert_eq!(state.role, Role::Passenger);

        state.reduce(RoleAction::Loaded(Some(SessionUserDto {
            id: "driver-7".to_string(),
            role: Role::Driver,
        })));

        assert_eq!(state.role, Role::Driver);
        assert_eq!(state.user_id.as_deref(), Some("driver-7"));
        assert!(state.fetched);
    }

    /// Expect a missing session to keep the current role but mark the lookup done
    #[test]
    fn loaded_without_user_keeps_role() {
        let mut state = RoleState {
            role: Role::Driver,
            user_id: Some("driver-7".to_string()),
            fetched: false,
        };

        state.reduce(RoleAction::Loaded(None));

        assert_eq!(state.role, Role::Driver);
        assert!(state.user_id.is_none());
        assert!(state.fetched);
    }

    /// Expect signing out to forget the user but keep the role
    #[test]
    fn signed_out_clears_user() {
        let mut state = RoleState::default();
        state.reduce(RoleAction::Loaded(Some(SessionUserDto {
            id: "driver-7".to_string(),
            role: Role::Driver,
        })));

        state.reduce(RoleAction::SignedOut);

        assert_eq!(state.role, Role::Driver);
        assert!(state.user_id.is_none());
        assert!(state.fetched);
    }

    /// Expect a switch to only change the role
    #[test]
    fn switched_changes_role_only() {
        let mut state = RoleState::default();

        state.reduce(RoleAction::Switched(Role::Driver));

        assert_eq!(
            state,
            RoleState {
                role: Role::Driver,
                user_id: None,
                fetched: false,
            }
        );
    }
}
