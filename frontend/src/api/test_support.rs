#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const PUT: Method = Method::PUT;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    /// What the client actually sent, for asserting on headers and bodies.
    #[derive(Debug, Clone)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub headers: reqwest::header::HeaderMap,
        pub body: Option<Value>,
    }

    impl ReceivedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).and_then(|value| value.to_str().ok())
        }
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.raw_body {
                Some(raw) => MockResponse::raw(status, raw),
                None => MockResponse::json(status, then.body.unwrap_or_else(|| serde_json::json!({}))),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn received_for(&self, method: Method, path: &str) -> Vec<ReceivedRequest> {
            self.received()
                .into_iter()
                .filter(|request| request.method == method && request.path == path)
                .collect()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok());

            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(ReceivedRequest {
                method: method.clone(),
                path: path.clone(),
                headers: request.headers().clone(),
                body,
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .map(|route| route.response.clone())
                .ok_or_else(|| {
                    ApiError::request_failed(format!("No mock for {} {}", method, path))
                })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw_body: Option<String>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, body: &str) -> &mut Self {
            self.raw_body = Some(body.to_string());
            self
        }
    }
}
