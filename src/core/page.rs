use crate::core::auth::Auth;
use crate::core::render::{self, ToastKind};
use crate::core::{Document, KeyValueStore, Navigator, NodeHandle};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

pub const NAV_AUTH_ID: &str = "navAuth";
pub const AUTH_BUTTONS_ID: &str = "authButtons";
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 綁定一份頁面與 session 的 UI 輔助函式
pub struct Page<D, S>
where
    D: Document + Navigator + 'static,
    S: KeyValueStore,
{
    document: Arc<D>,
    auth: Auth<S>,
}

impl<D, S> Page<D, S>
where
    D: Document + Navigator + 'static,
    S: KeyValueStore,
{
    pub fn new(document: Arc<D>, auth: Auth<S>) -> Self {
        Self { document, auth }
    }

    pub fn document(&self) -> &Arc<D> {
        &self.document
    }

    pub fn auth(&self) -> &Auth<S> {
        &self.auth
    }

    /// 頁面載入時呼叫
    pub fn on_load(&self) -> bool {
        self.update_navigation()
    }

    /// 已登入時把導覽列的登入區塊換成使用者選單，回傳是否有更新
    pub fn update_navigation(&self) -> bool {
        let target = [NAV_AUTH_ID, AUTH_BUTTONS_ID]
            .into_iter()
            .find(|id| self.document.has_element(id));

        let Some(target) = target else {
            return false;
        };

        if !self.auth.is_logged_in() {
            return false;
        }

        let Some(user) = self.auth.user() else {
            tracing::warn!("⚠️ Token present but no readable user record, leaving navigation as is");
            return false;
        };

        self.document
            .set_inner_html(target, &render::user_menu_markup(&user))
    }

    /// 附加一則通知，3 秒後自動移除。
    /// 不在 tokio runtime 中時通知會留著，不會自動移除。
    pub fn show_toast(&self, message: &str, kind: ToastKind) -> NodeHandle {
        let handle = self
            .document
            .append_to_body(&render::toast_markup(message, kind));

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let document = Arc::clone(&self.document);
                runtime.spawn(async move {
                    tokio::time::sleep(TOAST_DURATION).await;
                    document.remove_node(handle);
                });
            }
            Err(e) => {
                tracing::warn!("⚠️ No async runtime, toast will not expire on its own: {}", e);
            }
        }

        handle
    }

    pub fn show_loading(&self, container_id: &str) -> bool {
        let replaced = self
            .document
            .set_inner_html(container_id, render::loading_markup());
        if !replaced {
            tracing::debug!("Loading container '{}' not found", container_id);
        }
        replaced
    }

    pub fn logout(&self) -> Result<()> {
        self.auth.logout(self.document.as_ref())
    }
}
