use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;

/// A user's current operating mode, deciding which links and dashboard are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    #[default]
    Passenger,
}

impl Role {
    /// The role a user switches to from this one.
    pub fn complement(self) -> Self {
        match self {
            Self::Driver => Self::Passenger,
            Self::Passenger => Self::Driver,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Passenger => "passenger",
        }
    }

    /// Capitalized name used in button labels.
    pub fn title(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Passenger => "Passenger",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(Self::Driver),
            "passenger" => Ok(Self::Passenger),
            other => Err(ClientError::UnknownRole(other.to_string())),
        }
    }
}

/// The signed in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUserDto {
    pub id: String,
    pub role: Role,
}

/// Partial update applied to a user's document when their role changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdateDto {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect each role to switch to the other one
    #[test]
    fn complement_swaps_roles() {
        assert_eq!(Role::Driver.complement(), Role::Passenger);
        assert_eq!(Role::Passenger.complement(), Role::Driver);
        assert_eq!(Role::Driver.complement().complement(), Role::Driver);
    }

    /// Expect roles to use lowercase names on the wire
    #[test]
    fn role_serializes_lowercase() {
        let body = serde_json::to_string(&RoleUpdateDto { role: Role::Driver }).unwrap();
        assert_eq!(body, r#"{"role":"driver"}"#);

        let user: SessionUserDto =
            serde_json::from_str(r#"{"id":"abc123","role":"passenger"}"#).unwrap();
        assert_eq!(user.role, Role::Passenger);
        assert_eq!(user.id, "abc123");
    }

    /// Expect error when parsing a role that is neither driver nor passenger
    #[test]
    fn rejects_unknown_role() {
        assert_eq!("driver".parse::<Role>().unwrap(), Role::Driver);

        let result = "admin".parse::<Role>();
        assert!(matches!(result, Err(ClientError::UnknownRole(role)) if role == "admin"));

        assert!(serde_json::from_str::<Role>(r#""Driver""#).is_err());
    }
}
