#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{LoginFlagRecord, User, UserDetails};

    pub fn user(id: &str, details_id: &str, email: Option<&str>) -> User {
        User {
            id: id.into(),
            role: "admin".into(),
            user_details: UserDetails {
                id: details_id.into(),
                email: email.map(str::to_string),
                profile_pic: None,
                is_active: Some(true),
            },
        }
    }

    pub fn user_with_role(id: &str, details_id: &str, email: &str, role: &str) -> User {
        User {
            role: role.into(),
            ..user(id, details_id, Some(email))
        }
    }

    pub fn flag(user_id: &str, enabled: bool) -> LoginFlagRecord {
        LoginFlagRecord {
            user_id: user_id.into(),
            google_login_enabled: enabled,
        }
    }
}
