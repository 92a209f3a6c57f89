//! Auth session data types.

use serde::{Deserialize, Serialize};

/// Identity attached to an auth session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session as issued by the backend's auth service.
///
/// Only its presence and `user.email` matter to the storefront; the tokens are
/// handed back to the backend untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

impl Session {
    /// Email of the signed-in user, if the auth provider supplied one.
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_token_response() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": {"id": "u-1", "email": "a@b.com", "role": "authenticated"}
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.email(), Some("a@b.com"));
    }

    #[test]
    fn test_empty_email_is_absent() {
        let session = Session {
            access_token: "jwt".to_string(),
            refresh_token: None,
            user: AuthUser {
                id: "u-1".to_string(),
                email: Some(String::new()),
            },
        };
        assert!(session.email().is_none());
    }
}
