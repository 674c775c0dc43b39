use std::collections::HashSet;

use crate::common::constants::DEFAULT_PAGE_SIZE;
use crate::common::entry::{FileEntry, FolderEntry};
use crate::common::id::EntryId;
use crate::view::filter::TypeFilter;
use crate::view::page::Page;
use crate::view::scope::ancestor_chain;
use crate::view::sort::{SortDirection, SortField};

/// Everything one dashboard instance remembers between renders.
///
/// Held in UI memory only, never persisted. The state survives collection
/// reloads untouched: a reload replaces the `files`/`folders` collections
/// it is built over, not the user's search term, sort choice or page.
///
/// Every mutator that changes a filter dimension resets the page to 1;
/// that is the contract [`crate::view::page::paginate`] relies on instead
/// of clamping. Changing the sort alone keeps the current page.
//
// // 一个仪表盘实例在两次渲染之间记住的全部状态。
// //
// // 只存在于 UI 内存中，从不持久化。集合重载不会触碰这份状态：
// // 重载替换的是它所作用的 `files`/`folders` 集合，
// // 而不是用户的搜索词、排序选择或页码。
// //
// // 每个改变过滤维度的修改方法都会把页码重置为 1；
// // `paginate` 依赖的正是这一约定而不是钳制。只改排序则保持当前页。
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The open folder; `None` is the root.
    pub current_folder_id: Option<EntryId>,
    /// The ancestor chain of `current_folder_id`, root-first. Maintained by
    /// the navigation methods so it always matches the open folder.
    pub breadcrumb: Vec<FolderEntry>,
    pub search_term: String,
    pub type_filter: TypeFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
    pub selected_files: HashSet<EntryId>,
    pub selected_folders: HashSet<EntryId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            current_folder_id: None,
            breadcrumb: Vec::new(),
            search_term: String::new(),
            type_filter: TypeFilter::default(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected_files: HashSet::new(),
            selected_folders: HashSet::new(),
        }
    }

    // --- 过滤维度（都会重置页码） ---

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.type_filter = filter;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }

    // --- 排序与翻页（不重置页码） ---

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    // --- 文件夹导航 ---

    /// Opens a folder, recomputing the breadcrumb from the folder
    /// collection. Resets the page and drops any selection, which belongs
    /// to the scope being left behind.
    pub fn open_folder(&mut self, folder_id: &EntryId, folders: &[FolderEntry]) {
        self.current_folder_id = Some(folder_id.clone());
        self.breadcrumb = ancestor_chain(folders, folder_id)
            .into_iter()
            .cloned()
            .collect();
        self.page = 1;
        self.clear_selection();
    }

    /// Navigates to the folder at `index` in the breadcrumb, if any.
    pub fn open_breadcrumb(&mut self, index: usize, folders: &[FolderEntry]) {
        if let Some(folder) = self.breadcrumb.get(index).cloned() {
            self.open_folder(&folder.id, folders);
        }
    }

    pub fn go_to_root(&mut self) {
        self.current_folder_id = None;
        self.breadcrumb.clear();
        self.page = 1;
        self.clear_selection();
    }

    // --- 批量操作的选择集 ---

    pub fn toggle_file_selected(&mut self, id: &EntryId) {
        if !self.selected_files.remove(id) {
            self.selected_files.insert(id.clone());
        }
    }

    pub fn toggle_folder_selected(&mut self, id: &EntryId) {
        if !self.selected_folders.remove(id) {
            self.selected_folders.insert(id.clone());
        }
    }

    /// Selects every file on the currently visible page (the "select all"
    /// checkbox operates on the page, not the whole collection).
    pub fn select_visible_files(&mut self, page: &Page<'_, FileEntry>) {
        for file in &page.items {
            self.selected_files.insert(file.id.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_files.clear();
        self.selected_folders.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_files.is_empty() || !self.selected_folders.is_empty()
    }
}
