//! The ingestion boundary.
//!
//! Raw backend records are shape-shifting: the same concept arrives as
//! `name` or `fileName`, `size` or `fileSize`, `parentFolder.id` or a bare
//! `folderId`, depending on which endpoint (or which backend version)
//! produced it. Everything is normalized here, immediately after fetch,
//! into the canonical records of [`crate::common::entry`].
//
// // 摄取边界。
// //
// // 后端的原始记录形态多变：同一个概念可能以 `name` 或 `fileName`、
// // `size` 或 `fileSize`、`parentFolder.id` 或裸露的 `folderId` 出现，
// // 取决于是哪个端点（或哪个后端版本）生成的。
// // 所有差异都在这里、在拉取之后立即被规范化为 `common::entry` 中的规范记录。

use serde::Deserialize;

use crate::common::entry::{FileEntry, FolderEntry};
use crate::common::id::EntryId;
use crate::utils::file_type::classify_file_type;
use crate::utils::time::parse_timestamp;

/// The `parentFolder` sub-object some endpoints embed instead of a flat id.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentRef {
    pub id: EntryId,
}

/// A file record exactly as the backend sends it, field-name variants and
/// all. Only the id is required; every other field is substituted with a
/// default when missing, so one malformed record never fails a reload.
//
// // 与后端发送的一模一样的文件记录，保留全部字段名变体。
// // 只有 id 是必需的；其余字段缺失时以默认值替代，
// // 因此单条畸形记录永远不会导致整次重载失败。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFileRecord {
    pub id: EntryId,
    #[serde(default, alias = "fileName")]
    pub name: Option<String>,
    #[serde(default, alias = "fileSize")]
    pub size: Option<u64>,
    #[serde(default, alias = "uploadDate")]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub parent_folder: Option<ParentRef>,
    #[serde(default)]
    pub folder_id: Option<EntryId>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub is_password_protected: Option<bool>,
}

impl RawFileRecord {
    /// Collapses the field-name variants into a canonical [`FileEntry`].
    pub fn into_file_entry(self) -> FileEntry {
        let name = self.name.unwrap_or_default();
        // parentFolder.id 优先，其次是扁平的 folderId
        let parent_folder_id = self.parent_folder.map(|p| p.id).or(self.folder_id);
        let file_type = match self.file_type {
            Some(t) if !t.is_empty() => t,
            _ => classify_file_type(&name).to_string(),
        };
        FileEntry {
            id: self.id,
            size: self.size.unwrap_or(0),
            uploaded_at: self.uploaded_at.as_deref().and_then(parse_timestamp),
            parent_folder_id,
            file_type,
            is_password_protected: self.is_password_protected.unwrap_or(false),
            name,
        }
    }
}

/// A folder record as the backend sends it. Folders use yet another pair of
/// parent variants: `parentFolder.id` or `parentId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFolderRecord {
    pub id: EntryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub parent_folder: Option<ParentRef>,
    #[serde(default)]
    pub parent_id: Option<EntryId>,
    #[serde(default)]
    pub is_password_protected: Option<bool>,
}

impl RawFolderRecord {
    pub fn into_folder_entry(self) -> FolderEntry {
        FolderEntry {
            id: self.id,
            name: self.name.unwrap_or_default(),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            parent_folder_id: self.parent_folder.map(|p| p.id).or(self.parent_id),
            is_password_protected: self.is_password_protected.unwrap_or(false),
        }
    }
}
