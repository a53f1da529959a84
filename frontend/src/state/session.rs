use crate::utils::storage as storage_utils;

pub const TOKEN_STORAGE_KEY: &str = "Token";
pub const ORG_STORAGE_KEY: &str = "org";

/// Credentials attached to every API request.
///
/// Read once from `localStorage` when the app mounts and handed to the
/// [`ApiClient`](crate::api::ApiClient); nothing below the app root touches
/// storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub org: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            org: Some(org.into()),
        }
    }

    pub fn from_local_storage() -> Self {
        match storage_utils::local_storage() {
            Ok(storage) => Self {
                token: storage_utils::read_item(&storage, TOKEN_STORAGE_KEY),
                org: storage_utils::read_item(&storage, ORG_STORAGE_KEY),
            },
            Err(err) => {
                log::warn!("Session unavailable: {}", err);
                Self::default()
            }
        }
    }

    /// Value of the `org` header; an empty string when no organization is selected.
    pub fn org_header(&self) -> &str {
        self.org.as_deref().unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
