use crate::domain::ports::{Document, NodeHandle, Navigator};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct DocumentState {
    elements: HashMap<String, String>,
    body: Vec<(NodeHandle, String)>,
    next_node: u64,
    location: Option<String>,
}

/// 記憶體中的頁面：以 id 索引的元素加上 body 尾端附加的節點。
/// 同時記錄最後一次跳轉的位置。
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str, inner_html: &str) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state
                .elements
                .insert(id.to_string(), inner_html.to_string());
        }
        self
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.state.lock().ok()?.elements.get(id).cloned()
    }

    pub fn body_nodes(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.body.iter().map(|(_, html)| html.clone()).collect())
            .unwrap_or_default()
    }

    pub fn location(&self) -> Option<String> {
        self.state.lock().ok()?.location.clone()
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.state
            .lock()
            .map(|state| state.elements.contains_key(id))
            .unwrap_or(false)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        match state.elements.get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }

    fn append_to_body(&self, html: &str) -> NodeHandle {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.next_node += 1;
        let handle = NodeHandle(state.next_node);
        state.body.push((handle, html.to_string()));
        handle
    }

    fn remove_node(&self, handle: NodeHandle) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        let before = state.body.len();
        state.body.retain(|(node, _)| *node != handle);
        state.body.len() != before
    }
}

impl Navigator for MemoryDocument {
    fn navigate(&self, path: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.location = Some(path.to_string());
        }
    }
}

/// 終端機環境沒有頁面可跳轉，只記錄目的地
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!("➡️ Redirecting to {}", path);
    }
}
