use crate::layout::left::sidebar::PLACEHOLDER_AVATAR;
use crate::system::auth::context::use_auth;
use contracts::enums::Role;
use contracts::system::auth::UserProfile;
use leptos::prelude::*;

/// Caption for the access tier of a stored role.
fn access_label(raw: Option<&str>) -> String {
    match Role::normalize(raw) {
        Ok(role) => role.display_name().to_string(),
        Err(_) => "Unknown".to_string(),
    }
}

/// Read-only view of the signed-in user's profile.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let user = Memo::new(move |_| auth_state.with(|state| state.profile()));

    let access = move || user.with(|u| access_label(u.role.as_deref()));
    let field = move |pick: fn(&UserProfile) -> Option<String>| {
        move || user.with(|u| pick(u).unwrap_or_else(|| "Not set".to_string()))
    };

    view! {
        <section class="page-card profile-page">
            <div class="profile-page__head">
                <img
                    class="profile-page__avatar"
                    src=move || user.with(|u| u.avatar_or(PLACEHOLDER_AVATAR).to_string())
                    alt="user"
                />
                <div>
                    <h2 class="page-card__title">{move || user.with(|u| u.display_name())}</h2>
                    <p class="page-card__hint">{access}</p>
                </div>
            </div>
            <dl class="profile-page__fields">
                <dt>"Full name"</dt>
                <dd>{field(|u| u.full_name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{move || user.with(|u| u.role_label())}</dd>
            </dl>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_label() {
        assert_eq!(access_label(Some("root")), "Unknown");
        assert_eq!(access_label(Some(" admin ")), "Unknown");
        assert_eq!(access_label(None), Role::User.display_name());
        assert_eq!(access_label(Some("manager")), Role::Manager.display_name());
    }
}
