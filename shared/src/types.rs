use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ============================================================================
// Localization Types
// ============================================================================

/// A selectable UI language, as listed in `languages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub key: String,
    pub name: String,
}

impl LanguageOption {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_deserializes() {
        let json = r#"{
            "token": "abc",
            "user": {
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "username": "olena",
                "email": "a@b.com"
            }
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user.email, "a@b.com");
    }

    #[test]
    fn test_language_option_list_deserializes_in_order() {
        let json = r#"[{"key": "en", "name": "English"}, {"key": "fr", "name": "Français"}]"#;
        let langs: Vec<LanguageOption> = serde_json::from_str(json).unwrap();
        assert_eq!(
            langs,
            vec![
                LanguageOption::new("en", "English"),
                LanguageOption::new("fr", "Français"),
            ]
        );
    }
}
