use contracts::system::auth::UserProfile;
use web_sys::window;

const AUTH_TOKEN_KEY: &str = "authToken";
const USER_DATA_KEY: &str = "userData";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Decode a stored profile. Malformed JSON counts as no profile.
pub fn parse_user(raw: &str) -> Option<UserProfile> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("ignoring malformed stored user profile: {}", err);
            None
        }
    }
}

/// Profile left in localStorage by the sign-in flow
pub fn get_user() -> Option<UserProfile> {
    let raw = get_local_storage()?.get_item(USER_DATA_KEY).ok()??;
    parse_user(&raw)
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
        let _ = storage.remove_item(USER_DATA_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let user = parse_user(r#"{"fullName":"Alex Johnson","email":"alex@nexus.io","role":"ADMIN"}"#)
            .unwrap();
        assert_eq!(user.display_name(), "Alex Johnson");
        assert_eq!(user.role.as_deref(), Some("ADMIN"));

        assert_eq!(parse_user("{}"), Some(UserProfile::default()));
        assert_eq!(parse_user("not json"), None);
    }
}
