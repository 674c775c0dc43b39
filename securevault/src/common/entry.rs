use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::id::EntryId;

/// The canonical record for a stored document, as the rest of the crate
/// sees it.
///
/// Backend responses arrive with inconsistent field names
/// (`name`/`fileName`, `size`/`fileSize`, ...); those are normalized into
/// this shape once at the ingestion boundary (see [`crate::common::ingest`])
/// so no downstream code ever branches on field-name variants.
//
// // 已存储文档的规范记录，也是 crate 其余部分所见到的唯一形态。
// //
// // 后端响应的字段命名并不一致（`name`/`fileName`、`size`/`fileSize` 等），
// // 这些差异会在摄取边界被一次性规范化为此结构，
// // 下游代码永远不需要在字段名变体之间做分支。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Opaque identifier assigned at upload time. Immutable.
    pub id: EntryId,

    /// Display name. Mutable via rename.
    pub name: String,

    /// Byte count. Immutable once uploaded; missing in the source record
    /// means zero.
    #[serde(default)]
    pub size: u64,

    /// Upload timestamp. `None` when the backend supplied nothing parseable;
    /// such entries sort as oldest.
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,

    /// Reference to the containing folder; `None` means the root.
    #[serde(default)]
    pub parent_folder_id: Option<EntryId>,

    /// Coarse category label ("PDF", "Image", ...). Derived from the file
    /// name when the backend supplies none.
    #[serde(default)]
    pub file_type: String,

    /// Whether the password gate applies to this file. The list pipeline
    /// only ever surfaces metadata of protected entries.
    #[serde(default)]
    pub is_password_protected: bool,
}

/// The canonical record for a folder. The parent references form a forest;
/// that is a guarantee of the backend, not something this crate enforces.
//
// // 文件夹的规范记录。父引用构成一个森林（无环）；
// // 这是后端的保证，本 crate 不做强制校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// `None` marks a root-level folder.
    #[serde(default)]
    pub parent_folder_id: Option<EntryId>,
    #[serde(default)]
    pub is_password_protected: bool,
}

/// A row of the admin analytics table. Carried here because the list
/// pipeline sorts these rows by status and storage use, exactly as it
/// sorts files by name or size.
//
// // 管理员分析表的一行。列表管道会按状态和存储用量对这些行排序，
// // 就像按名称或大小对文件排序一样，因此放在同一数据模型中。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Textual status as the backend reports it ("active" / "inactive").
    #[serde(default)]
    pub status: Option<String>,
    /// Legacy boolean flag some backend versions use instead of `status`.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Storage used in gigabytes.
    #[serde(default)]
    pub storage_used: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// A user counts as active when the status field says so, or when the
    /// legacy flag is anything but an explicit `false`.
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active") || self.is_active != Some(false)
    }
}
