mod pipeline_test;

use chrono::TimeZone;
use chrono::Utc;

use crate::common::entry::{FileEntry, FolderEntry, UserRecord};
use crate::common::id::EntryId;

/// 构造一个测试文件条目。`day` 决定上传日期（2024-01-day）。
pub(crate) fn file(
    id: &str,
    name: &str,
    size: u64,
    folder: Option<&str>,
    file_type: &str,
    day: u32,
) -> FileEntry {
    FileEntry {
        id: EntryId::from(id),
        name: name.to_string(),
        size,
        uploaded_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).single(),
        parent_folder_id: folder.map(EntryId::from),
        file_type: file_type.to_string(),
        is_password_protected: false,
    }
}

pub(crate) fn folder(id: &str, name: &str, parent: Option<&str>) -> FolderEntry {
    FolderEntry {
        id: EntryId::from(id),
        name: name.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single(),
        parent_folder_id: parent.map(EntryId::from),
        is_password_protected: false,
    }
}

pub(crate) fn user(id: &str, name: &str, status: &str, storage_used: f64) -> UserRecord {
    UserRecord {
        id: EntryId::from(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: "User".to_string(),
        status: Some(status.to_string()),
        is_active: None,
        storage_used,
        created_at: None,
    }
}
