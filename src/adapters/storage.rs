use crate::domain::ports::KeyValueStore;
use crate::utils::error::{ClientError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

type Entries = BTreeMap<String, String>;

fn lock_entries(entries: &Mutex<Entries>) -> Result<MutexGuard<'_, Entries>> {
    entries.lock().map_err(|_| ClientError::StorageError {
        message: "storage lock poisoned".to_string(),
    })
}

/// 純記憶體儲存，行程結束即消失
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<Entries>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        lock_entries(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        lock_entries(&self.entries)?.remove(key);
        Ok(())
    }
}

/// 以單一 JSON 檔案保存的鍵值儲存，CLI 用它代替瀏覽器的 localStorage。
/// 每次寫入都會把整份內容寫回檔案。
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl LocalStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Entries::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Ignoring unreadable session file {}: {}",
                        path.display(),
                        e
                    );
                    Entries::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Entries::new(),
            Err(e) => return Err(ClientError::IoError(e)),
        };

        tracing::debug!(
            "Opened session storage {} ({} entries)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    // 先寫檔成功才換掉記憶體內容，寫入失敗時狀態維持原樣
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = lock_entries(&self.entries)?;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut entries = lock_entries(&self.entries)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }
}
