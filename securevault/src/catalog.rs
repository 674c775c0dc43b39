//! The in-memory collections the dashboard owns.
//!
//! The consistency model is reload-to-converge: after any mutating backend
//! call the client refetches the whole collection and replaces it here,
//! rather than patching individual entries. The two exceptions are the
//! only mutable fields a file or folder has (name and protection flag),
//! which are updated optimistically; the mutators hand back the previous
//! value so a caller can roll back when the backend call fails.
//
// // 仪表盘独占持有的内存集合。
// //
// // 一致性模型是"重载收敛"：任何变更性的后端调用之后，
// // 客户端重新拉取整个集合并在这里整体替换，而不是逐条打补丁。
// // 仅有的例外是文件/文件夹仅有的两个可变字段（名称和保护标志），
// // 它们采用乐观更新；修改方法会返回旧值，
// // 以便调用方在后端调用失败时回滚。

use crate::common::entry::{FileEntry, FolderEntry};
use crate::common::id::EntryId;
use crate::common::ingest::{RawFileRecord, RawFolderRecord};
use crate::offline::store::OfflineState;
use crate::utils::file_type::classify_file_type;
use chrono::Utc;

/// Errors of the optimistic mutation helpers. Reloads never fail; a raw
/// record that is missing fields is normalized with defaults, not rejected.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The referenced entry is not in the collection (it may have been
    /// removed by a reload racing this mutation).
    #[error("No entry with id '{0}' in the catalog")]
    NotFound(EntryId),
}

/// The `files` and `folders` collections, owned exclusively by the
/// dashboard container. Descendant views borrow them read-only and signal
/// mutations back up; nothing else writes here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    // --- 重载收敛 ---

    /// Replaces the file collection wholesale with freshly fetched backend
    /// records, normalizing them at this boundary.
    pub fn replace_files(&mut self, raw: Vec<RawFileRecord>) {
        self.files = raw
            .into_iter()
            .map(RawFileRecord::into_file_entry)
            .collect();
    }

    /// Replaces the folder collection wholesale.
    pub fn replace_folders(&mut self, raw: Vec<RawFolderRecord>) {
        self.folders = raw
            .into_iter()
            .map(RawFolderRecord::into_folder_entry)
            .collect();
    }

    /// Folds the offline store's protection flags into the collections.
    /// Offline mode calls this after every reload, because the backend
    /// records know nothing about locally-applied protection.
    pub fn apply_protection_overlay(&mut self, state: &OfflineState) {
        for file in &mut self.files {
            if let Some(record) = state.protected_files.get(&file.id) {
                file.is_password_protected = record.is_password_protected;
            }
        }
        for folder in &mut self.folders {
            if let Some(record) = state.protected_folders.get(&folder.id) {
                folder.is_password_protected = record.is_password_protected;
            }
        }
    }

    // --- 乐观更新（返回旧值以便回滚） ---

    /// Renames a file, returning the previous name.
    pub fn rename_file(
        &mut self,
        id: &EntryId,
        name: impl Into<String>,
    ) -> Result<String, CatalogError> {
        let file = self.file_mut(id)?;
        Ok(std::mem::replace(&mut file.name, name.into()))
    }

    /// Sets a file's protection flag, returning the previous flag.
    pub fn set_file_protected(
        &mut self,
        id: &EntryId,
        protected: bool,
    ) -> Result<bool, CatalogError> {
        let file = self.file_mut(id)?;
        Ok(std::mem::replace(&mut file.is_password_protected, protected))
    }

    pub fn rename_folder(
        &mut self,
        id: &EntryId,
        name: impl Into<String>,
    ) -> Result<String, CatalogError> {
        let folder = self.folder_mut(id)?;
        Ok(std::mem::replace(&mut folder.name, name.into()))
    }

    pub fn set_folder_protected(
        &mut self,
        id: &EntryId,
        protected: bool,
    ) -> Result<bool, CatalogError> {
        let folder = self.folder_mut(id)?;
        Ok(std::mem::replace(
            &mut folder.is_password_protected,
            protected,
        ))
    }

    // --- 确认删除后的移除 ---

    /// Removes a file after its delete was confirmed by the backend (or by
    /// the offline store) and returns the removed entry.
    pub fn remove_file(&mut self, id: &EntryId) -> Result<FileEntry, CatalogError> {
        let index = self
            .files
            .iter()
            .position(|f| f.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        Ok(self.files.remove(index))
    }

    pub fn remove_folder(&mut self, id: &EntryId) -> Result<FolderEntry, CatalogError> {
        let index = self
            .folders
            .iter()
            .position(|f| f.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        Ok(self.folders.remove(index))
    }

    // --- 离线回退模式下的本地新增 ---

    /// Registers a file created in offline mode, minting a timestamp-based
    /// id and classifying the type from the name. Returns the new entry.
    pub fn insert_local_file(
        &mut self,
        name: impl Into<String>,
        size: u64,
        parent_folder_id: Option<EntryId>,
    ) -> &FileEntry {
        let name = name.into();
        let entry = FileEntry {
            id: EntryId::mint_local(),
            file_type: classify_file_type(&name).to_string(),
            name,
            size,
            uploaded_at: Some(Utc::now()),
            parent_folder_id,
            is_password_protected: false,
        };
        self.files.push(entry);
        self.files.last().expect("just pushed")
    }

    pub fn insert_local_folder(
        &mut self,
        name: impl Into<String>,
        parent_folder_id: Option<EntryId>,
    ) -> &FolderEntry {
        let entry = FolderEntry {
            id: EntryId::mint_local(),
            name: name.into(),
            created_at: Some(Utc::now()),
            parent_folder_id,
            is_password_protected: false,
        };
        self.folders.push(entry);
        self.folders.last().expect("just pushed")
    }

    // --- 查找 ---

    pub fn file(&self, id: &EntryId) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.id == *id)
    }

    pub fn folder(&self, id: &EntryId) -> Option<&FolderEntry> {
        self.folders.iter().find(|f| f.id == *id)
    }

    /// Resolves a folder by id first, then by exact name. UI callers pass
    /// whatever handle the user has.
    pub fn resolve_folder(&self, key: &str) -> Option<&FolderEntry> {
        self.folders
            .iter()
            .find(|f| f.id.as_str() == key)
            .or_else(|| self.folders.iter().find(|f| f.name == key))
    }

    fn file_mut(&mut self, id: &EntryId) -> Result<&mut FileEntry, CatalogError> {
        self.files
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    fn folder_mut(&mut self, id: &EntryId) -> Result<&mut FolderEntry, CatalogError> {
        self.folders
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}
