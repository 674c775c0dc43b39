//! The list-view engine behind every dashboard view.
//!
//! A view is produced by a fixed pipeline of pure stages, applied in this
//! order: folder scoping, search filter, type filter, sort, pagination.
//! Each stage consumes the previous stage's output and mutates nothing;
//! the stages are total functions with no failure modes of their own.
//
// // 每个仪表盘视图背后的列表视图引擎。
// //
// // 视图由一条固定顺序的纯函数管道产生：
// // 文件夹作用域 → 搜索过滤 → 类型过滤 → 排序 → 分页。
// // 每个阶段只消费上一阶段的输出，不修改任何输入；
// // 所有阶段都是全函数，自身没有失败模式。

use chrono::{DateTime, Utc};

pub mod filter;
pub mod page;
pub mod scope;
pub mod sort;
pub mod state;

pub use filter::{TypeFilter, available_types, search_filter, type_filter};
pub use page::{Page, paginate};
pub use scope::{ancestor_chain, scope_to_folder};
pub use sort::{SortDirection, SortField, sort_items};
pub use state::ViewState;

use crate::common::entry::{FileEntry, FolderEntry, UserRecord};
use crate::common::id::EntryId;

/// The read-only surface the pipeline stages need from an item.
///
/// Files, folders and admin user rows all flow through the same stages;
/// the defaults mean an item kind only answers for the keys it has
/// (a folder has no byte size, a user row has no parent folder).
//
// // 管道各阶段对条目所需的只读接口。
// //
// // 文件、文件夹和管理员用户行都流经同一套阶段；
// // 默认实现意味着每种条目只需要回答它实际拥有的键
// // （文件夹没有字节大小，用户行没有父文件夹）。
pub trait ViewItem {
    /// The name shown in lists; also the primary search target.
    fn display_name(&self) -> &str;

    /// The category label the search and type filters match against.
    fn type_label(&self) -> Option<&str> {
        None
    }

    /// The containing folder; `None` means the root scope.
    fn parent_folder_id(&self) -> Option<&EntryId> {
        None
    }

    fn byte_size(&self) -> u64 {
        0
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn storage_used(&self) -> f64 {
        0.0
    }

    fn is_active(&self) -> bool {
        true
    }
}

impl ViewItem for FileEntry {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn type_label(&self) -> Option<&str> {
        Some(&self.file_type)
    }

    fn parent_folder_id(&self) -> Option<&EntryId> {
        self.parent_folder_id.as_ref()
    }

    fn byte_size(&self) -> u64 {
        self.size
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }
}

impl ViewItem for FolderEntry {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn parent_folder_id(&self) -> Option<&EntryId> {
        self.parent_folder_id.as_ref()
    }

    // 文件夹按创建时间参与"上传日期"排序
    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ViewItem for UserRecord {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn storage_used(&self) -> f64 {
        self.storage_used
    }

    fn is_active(&self) -> bool {
        UserRecord::is_active(self)
    }
}

/// One rendered dashboard snapshot: the folders of the current scope plus
/// a page of its files. Borrows from the collections; building a view
/// copies nothing and mutates nothing.
#[derive(Debug)]
pub struct FileView<'a> {
    /// Folders in scope, search-filtered and sorted. Folders are never
    /// paginated and never hidden by the type filter (they carry no type).
    pub folders: Vec<&'a FolderEntry>,
    /// The requested page of the scoped, filtered, sorted files.
    pub files: Page<'a, FileEntry>,
}

impl<'a> FileView<'a> {
    /// Runs the full pipeline for one dashboard render.
    pub fn build(
        files: &'a [FileEntry],
        folders: &'a [FolderEntry],
        state: &ViewState,
    ) -> FileView<'a> {
        let current = state.current_folder_id.as_ref();

        let mut shown_folders =
            search_filter(scope_to_folder(folders, current), &state.search_term);
        sort_items(&mut shown_folders, state.sort_field, state.sort_direction);

        let mut shown_files = type_filter(
            search_filter(scope_to_folder(files, current), &state.search_term),
            &state.type_filter,
        );
        sort_items(&mut shown_files, state.sort_field, state.sort_direction);

        FileView {
            folders: shown_folders,
            files: paginate(shown_files, state.page, state.page_size),
        }
    }
}
