use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as kept by the session.
///
/// Every field is optional: the identity provider may hand back a partial
/// record and the UI falls back to fixed labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

/// Label shown when neither a name nor an email is available.
pub const FALLBACK_USER_LABEL: &str = "User";

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl UserProfile {
    /// Name to show: full name, then the local part of the email, then "User".
    pub fn display_name(&self) -> String {
        non_blank(&self.full_name)
            .or_else(|| {
                non_blank(&self.email)
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
            })
            .unwrap_or(FALLBACK_USER_LABEL)
            .to_string()
    }

    /// Raw role string for the profile caption, "User" when absent.
    pub fn role_label(&self) -> String {
        role_label(self.role.as_deref())
    }

    pub fn avatar_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_blank(&self.avatar).unwrap_or(placeholder)
    }
}

/// Caption for a role as the session reports it, "User" when absent.
pub fn role_label(raw: Option<&str>) -> String {
    raw.filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_USER_LABEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_falls_back_to_user() {
        let user = UserProfile::default();
        assert_eq!(user.display_name(), "User");
        assert_eq!(user.role_label(), "User");
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let user = UserProfile {
            full_name: Some("Alex Johnson".into()),
            email: Some("alex@example.com".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Alex Johnson");
    }

    #[test]
    fn test_display_name_uses_email_local_part() {
        let user = UserProfile {
            full_name: Some("".into()),
            email: Some("alex.j@example.com".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "alex.j");

        let no_local = UserProfile {
            email: Some("@example.com".into()),
            ..Default::default()
        };
        assert_eq!(no_local.display_name(), "User");
    }

    #[test]
    fn test_avatar_placeholder() {
        let user = UserProfile::default();
        assert_eq!(user.avatar_or("placeholder.png"), "placeholder.png");

        let user = UserProfile {
            avatar: Some("me.png".into()),
            ..Default::default()
        };
        assert_eq!(user.avatar_or("placeholder.png"), "me.png");
    }

    #[test]
    fn test_role_label_keeps_raw_value() {
        assert_eq!(role_label(Some("ADMIN")), "ADMIN");
        assert_eq!(role_label(Some("")), "User");
        assert_eq!(role_label(Some("   ")), "   ");
        assert_eq!(role_label(None), "User");
    }

    #[test]
    fn test_deserialize_partial_camel_case() {
        let user: UserProfile =
            serde_json::from_str(r#"{"fullName":"Sam Lee","role":"MANAGER"}"#).unwrap();
        assert_eq!(user.full_name.as_deref(), Some("Sam Lee"));
        assert_eq!(user.role.as_deref(), Some("MANAGER"));
        assert_eq!(user.email, None);

        let empty: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, UserProfile::default());
    }
}
