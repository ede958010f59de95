//! Admin user-management types.

use serde::{Deserialize, Serialize};

/// Role values travel lowercase on the wire; [`UserRole::display_name`] is
/// the capitalized form the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Researcher,
    Admin,
    Contributor,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Researcher => "Researcher",
            UserRole::Admin => "Admin",
            UserRole::Contributor => "Contributor",
        }
    }

    pub fn all() -> [UserRole; 3] {
        [UserRole::Researcher, UserRole::Admin, UserRole::Contributor]
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "researcher" => Ok(UserRole::Researcher),
            "admin" => Ok(UserRole::Admin),
            "contributor" => Ok(UserRole::Contributor),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub is_active: bool,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserPayload {
    pub is_active: bool,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase_on_the_wire() {
        let payload = CreateUserPayload {
            email: "archivist@example.org".to_string(),
            is_active: true,
            role: UserRole::Admin,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"role\":\"admin\""));

        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","role":"contributor","is_active":false}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Contributor);
        assert_eq!(user.role.display_name(), "Contributor");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("owner".parse::<UserRole>().is_err());
    }
}
