use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client, Method, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::Session};

const ORG_HEADER: &str = "org";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Session::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: Session::default(),
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            config::normalize_base_url(base)
        } else {
            config::await_api_base_url().await
        }
    }

    fn session_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(token) = self.session.token.as_deref() {
            headers.insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(token)
                    .map_err(|_| ApiError::validation("Invalid token format"))?,
            );
        }
        headers.insert(
            HeaderName::from_static(ORG_HEADER),
            HeaderValue::from_str(self.session.org_header())
                .map_err(|_| ApiError::validation("Invalid organization id"))?,
        );

        Ok(headers)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .client
            .request(method, url)
            .headers(self.session_headers()?))
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Fully buffered response; the payloads on this page are small.
#[derive(Debug, Clone)]
pub(crate) struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub fn into_error(self) -> ApiError {
        serde_json::from_slice::<ApiError>(&self.body).unwrap_or_else(|_| {
            ApiError::request_failed(format!(
                "Request failed with status {}",
                self.status.as_u16()
            ))
        })
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<ApiResponse, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Option<Result<ApiResponse, ApiError>> {
    let responder = mock_transport::responder_for(request.url().as_str())?;
    Some(responder.respond(request).map(|mock| ApiResponse {
        status: StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        body: mock.body,
    }))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
