use crate::utils::error::Result;
use std::time::Duration;

/// 類似瀏覽器 localStorage 的同步字串鍵值儲存。
/// 實作需自行處理內部可變性，讓同一份儲存可以用 `Arc` 共用。
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// 整頁跳轉
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// 由 `Document::append_to_body` 回傳，用來之後移除該節點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// 頁面 DOM 的最小抽象
pub trait Document: Send + Sync {
    fn has_element(&self, id: &str) -> bool;
    /// 找不到元素時回傳 false
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
    fn append_to_body(&self, html: &str) -> NodeHandle;
    fn remove_node(&self, handle: NodeHandle) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn default_currency(&self) -> &str;
}
