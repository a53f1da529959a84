use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, LoginFlagRecord, UpdateLoginFlagRequest, User, UsersEnvelope};

impl ApiClient {
    /// Active users of the organization. A well-formed response without the
    /// nested `active_users` list yields an empty vector, not an error.
    pub async fn get_active_users(&self) -> Result<Vec<User>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.request(Method::GET, &format!("{}/users/", base_url))?)
            .await?;

        if response.status().is_success() {
            response
                .json::<UsersEnvelope>()
                .map(UsersEnvelope::into_users)
        } else {
            Err(response.into_error())
        }
    }

    pub async fn get_google_login_statuses(&self) -> Result<Vec<LoginFlagRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.request(Method::GET, &format!("{}/google-login-status/", base_url))?)
            .await?;

        if response.status().is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    /// The acknowledgement body is not interpreted; any 2xx counts as applied.
    pub async fn update_google_login_status(
        &self,
        user_id: &str,
        enabled: bool,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = UpdateLoginFlagRequest {
            user_id: user_id.to_string(),
            google_login_enabled: enabled,
        };
        let response = self
            .execute(
                self.request(Method::PUT, &format!("{}/google-login-status/", base_url))?
                    .json(&payload),
            )
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }
}
