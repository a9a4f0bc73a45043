use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// Role as carried by the authentication channel.
///
/// The channel delivers an opaque string; anything the parser does not
/// recognize must render as "no authorization", never as a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            ROLE_ADMIN => Some(UserRole::Admin),
            ROLE_USER => Some(UserRole::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, UserRole::User)
    }
}

/// Gate used by every list screen: only a loaded ADMIN role may edit.
/// A role that has not arrived yet is not authorized.
pub fn can_edit(role: Option<UserRole>) -> bool {
    matches!(role, Some(UserRole::Admin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse() {
        assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("USER"), Some(UserRole::User));
    }

    #[test]
    fn unknown_roles_are_unauthorized() {
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse("SUPERVISOR"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn only_admin_may_edit() {
        assert!(can_edit(Some(UserRole::Admin)));
        assert!(!can_edit(Some(UserRole::User)));
        assert!(!can_edit(None));
    }
}
