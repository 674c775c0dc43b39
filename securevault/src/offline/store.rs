use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::constants::OFFLINE_STORE_FILE;
use crate::common::id::EntryId;
use crate::offline::activity::ActivityRecord;
use crate::offline::protect::ProtectionRecord;

/// Defines errors that can occur while loading or saving the offline store.
//
// // 定义加载或保存离线存储时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to (de)serialize store document: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The persisted document of offline fallback mode: protection records
/// keyed by entry id, plus the append-only activity log. This is what the
/// original client kept in browser local storage, as one JSON document.
//
// // 离线回退模式的持久化文档：按条目 id 索引的保护记录，
// // 外加只追加的活动日志。原客户端把这些放在浏览器本地存储中，
// // 这里是同一份数据的单个 JSON 文档。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfflineState {
    pub protected_files: HashMap<EntryId, ProtectionRecord>,
    pub protected_folders: HashMap<EntryId, ProtectionRecord>,
    pub activity_logs: Vec<ActivityRecord>,
}

/// A file-backed [`OfflineState`]. Loading tolerates a missing file (a
/// vault that has never gone offline simply has an empty state); saving
/// writes to a temporary file first and renames it into place.
#[derive(Debug)]
pub struct OfflineStore {
    path: PathBuf,
    pub state: OfflineState,
}

impl OfflineStore {
    /// Opens the store inside a vault directory.
    pub fn open(vault_dir: &Path) -> Result<Self, StoreError> {
        let path = vault_dir.join(OFFLINE_STORE_FILE);
        let state = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => OfflineState::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(OfflineStore { path, state })
    }

    /// Persists the current state. Write-then-rename keeps the previous
    /// document intact if the process dies mid-write.
    pub fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_yields_empty_state() {
        let dir = tempdir().unwrap();
        let store = OfflineStore::open(dir.path()).unwrap();
        assert!(store.state.protected_files.is_empty());
        assert!(store.state.activity_logs.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = OfflineStore::open(dir.path()).unwrap();
        store
            .state
            .protect_file(EntryId::from("f1"), "hunter2");
        store
            .state
            .log_activity("upload", "file1.txt", "offline");
        store.save().unwrap();

        let reloaded = OfflineStore::open(dir.path()).unwrap();
        assert!(reloaded.state.is_file_protected(&EntryId::from("f1")));
        assert_eq!(reloaded.state.activity_logs.len(), 1);
        assert_eq!(reloaded.state.activity_logs[0].action, "upload");
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let mut store = OfflineStore::open(dir.path()).unwrap();
        store.state.protect_folder(EntryId::from("d1"), "pw");
        store.save().unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("protectedFolders"));
        assert!(raw.contains("isPasswordProtected"));
    }
}
