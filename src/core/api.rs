use crate::core::auth::Auth;
use crate::core::{
    ApiResponse, AuthResponse, ConfigProvider, KeyValueStore, LoginRequest, RegisterRequest, User,
};
use crate::utils::error::{ClientError, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// 對後端 API 的薄封裝：附上 Auth 標頭，回傳解析後的 JSON。
/// 不檢查狀態碼，也不重試。
pub struct ApiClient<S: KeyValueStore> {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
    auth: Auth<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, auth: Auth<S>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            auth,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, auth: Auth<S>) -> Self {
        let mut client = Self::new(config.base_url(), auth);
        client.timeout = config.request_timeout();
        client
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn auth(&self) -> &Auth<S> {
        &self.auth
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, endpoint, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send::<(), T>(Method::DELETE, endpoint, None).await
    }

    async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.url(endpoint);

        // 構建請求
        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.auth.headers()?);

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        // 設定超時
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 {} {}", method, url);

        // 執行請求
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", method, url, status);

        if !status.is_success() {
            tracing::warn!("⚠️ {} {} returned {}", method, url, status);
        }

        // 無論狀態碼為何都照樣解析回應內容
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST /auth/login，成功後保存 session
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<AuthResponse> = self.post("/auth/login", &request).await?;
        self.store_auth_response(response)
    }

    /// POST /auth/register，成功後保存 session
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let response: ApiResponse<AuthResponse> = self.post("/auth/register", request).await?;
        self.store_auth_response(response)
    }

    /// GET /auth/me
    pub async fn current_user(&self) -> Result<User> {
        let response: ApiResponse<User> = self.get("/auth/me").await?;
        unwrap_envelope(response)
    }

    fn store_auth_response(&self, response: ApiResponse<AuthResponse>) -> Result<AuthResponse> {
        let auth = unwrap_envelope(response)?;
        self.auth.set_auth(&auth.token, &auth.user())?;
        tracing::info!("✅ Logged in as {} ({})", auth.name, auth.role);
        Ok(auth)
    }
}

fn unwrap_envelope<T>(response: ApiResponse<T>) -> Result<T> {
    match response {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { message, .. } => Err(ClientError::ApiError {
            message: message.unwrap_or_else(|| "Request was not successful".to_string()),
        }),
    }
}
