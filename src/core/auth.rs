use crate::core::{KeyValueStore, Navigator, Session, User};
use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LOGIN_PATH: &str = "/login";

/// 讀寫 token 與使用者資料
pub struct Auth<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> Clone for Auth<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> Auth<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.get_item(TOKEN_KEY)
    }

    /// 無資料、`null` 或格式錯誤時都回傳 `None`
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("⚠️ Stored user record is malformed, ignoring it: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn set_auth(&self, token: &str, user: &User) -> Result<()> {
        // token 最後寫入，`is_logged_in` 只看 token
        self.store.set_item(USER_KEY, &serde_json::to_string(user)?)?;
        self.store.set_item(TOKEN_KEY, token)?;
        tracing::debug!("Saved session for {}", user.name);
        Ok(())
    }

    pub fn clear_auth(&self) -> Result<()> {
        self.store.remove_item(TOKEN_KEY)?;
        self.store.remove_item(USER_KEY)?;
        Ok(())
    }

    pub fn logout(&self, navigator: &dyn Navigator) -> Result<()> {
        self.clear_auth()?;
        tracing::info!("👋 Logged out");
        navigator.navigate(LOGIN_PATH);
        Ok(())
    }

    /// 每個 API 請求都帶的標頭。
    /// 尚未登入時不送 Authorization，避免送出 `Bearer null`。
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match self.token() {
            Some(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    ClientError::HeaderError {
                        name: AUTHORIZATION.to_string(),
                        message: e.to_string(),
                    }
                })?;
                headers.insert(AUTHORIZATION, value);
            }
            None => tracing::debug!("No token stored, sending request without Authorization"),
        }

        Ok(headers)
    }
}
