//! Request layer: single point of configuration for reaching the API.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::{Route, Session};
use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, warn};

/// Sample payload from /getData.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Health report from /health.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: f64,
    pub checks: HashMap<String, String>,
}

/// Transform applied to every outbound request, in registration order.
pub trait RequestInterceptor: Send + Sync {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Hook run against every inbound response, in registration order. Side
/// effects only; errors still propagate to the caller afterwards.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, response: &Response);
}

/// Attaches `Authorization: Bearer <token>` when the session holds a token.
/// A missing token is not an error; the request goes out unauthenticated.
pub struct AuthInterceptor {
    session: Arc<Session>,
}

impl AuthInterceptor {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// On 401, drops the stored token and navigates the session to the login
/// view. The original error still reaches the caller.
pub struct UnauthorizedInterceptor {
    session: Arc<Session>,
}

impl UnauthorizedInterceptor {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl ResponseInterceptor for UnauthorizedInterceptor {
    fn on_response(&self, response: &Response) {
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized response; clearing stored token");
            self.session.clear_token();
            self.session.navigate(Route::Login);
        }
    }
}

/// HTTP client for the API surface: configured base URL, fixed timeout,
/// default JSON content type, and the interceptor chains.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Result<Self, ClientError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_interceptors: vec![Arc::new(AuthInterceptor::new(session.clone()))],
            response_interceptors: vec![Arc::new(UnauthorizedInterceptor::new(session))],
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, ClientError> {
        let mut request = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(body);
        }
        for interceptor in &self.request_interceptors {
            request = interceptor.apply(request);
        }

        let response = request.send().await?;
        for interceptor in &self.response_interceptors {
            interceptor.on_response(&response);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }
        Ok(response)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        let response = self.send(method, path, body).await?;
        Ok(response.json().await?)
    }

    /// GET /getData
    pub async fn get_data(&self) -> Result<SampleData, ClientError> {
        self.fetch_json(Method::GET, "/getData", None)
            .await
            .map_err(|e| {
                error!("Error fetching data: {}", e);
                e
            })
    }

    /// POST /createData
    pub async fn create_data(&self, data: &Value) -> Result<Value, ClientError> {
        self.fetch_json(Method::POST, "/createData", Some(data))
            .await
            .map_err(|e| {
                error!("Error creating data: {}", e);
                e
            })
    }

    /// PUT /updateData/{id}
    pub async fn update_data(&self, id: &str, data: &Value) -> Result<Value, ClientError> {
        self.fetch_json(Method::PUT, &format!("/updateData/{}", id), Some(data))
            .await
            .map_err(|e| {
                error!("Error updating data: {}", e);
                e
            })
    }

    /// DELETE /deleteData/{id}
    pub async fn delete_data(&self, id: &str) -> Result<Value, ClientError> {
        self.fetch_json(Method::DELETE, &format!("/deleteData/{}", id), None)
            .await
            .map_err(|e| {
                error!("Error deleting data: {}", e);
                e
            })
    }

    /// GET /health
    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        self.fetch_json(Method::GET, "/health", None)
            .await
            .map_err(|e| {
                error!("Health check failed: {}", e);
                e
            })
    }
}
