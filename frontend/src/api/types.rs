use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub role: String,
    pub user_details: UserDetails,
}

impl User {
    /// Identifier the login settings service keys its records by.
    pub fn settings_key(&self) -> &str {
        &self.user_details.id
    }
}

/// `GET /users/` wraps the list twice: `{ active_users: { active_users: [...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub active_users: Option<ActiveUsers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveUsers {
    #[serde(default)]
    pub active_users: Option<Vec<User>>,
}

impl UsersEnvelope {
    pub fn into_users(self) -> Vec<User> {
        if self.error {
            return Vec::new();
        }
        self.active_users
            .and_then(|inner| inner.active_users)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFlagRecord {
    pub user_id: String,
    #[serde(default)]
    pub google_login_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLoginFlagRequest {
    pub user_id: String,
    pub google_login_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}
