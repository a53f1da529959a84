use crate::api::{ApiClient, ApiError, LoginFlagRecord, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminSettingsRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminSettingsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_active_users().await
    }

    pub async fn fetch_login_flags(&self) -> Result<Vec<LoginFlagRecord>, ApiError> {
        self.client.get_google_login_statuses().await
    }

    pub async fn update_login_flag(&self, user_id: &str, enabled: bool) -> Result<(), ApiError> {
        self.client.update_google_login_status(user_id, enabled).await
    }
}
