//! Functions for printing catalog entries to the console.

use securevault::common::entry::{FileEntry, FolderEntry};
use securevault::offline::activity::ActivityRecord;
use securevault::utils::size::format_file_size;
use securevault::view::page::Page;
use securevault::view::state::ViewState;

/// 打印当前作用域的面包屑，例如 "Home / Documents / Reports"
pub fn print_breadcrumb(state: &ViewState) {
    let mut line = String::from("Home");
    for folder in &state.breadcrumb {
        line.push_str(" / ");
        line.push_str(&folder.name);
    }
    println!("{}", line);
}

pub fn print_folder_row(folder: &FolderEntry, detail: bool) {
    let lock = if folder.is_password_protected {
        " [locked]"
    } else {
        ""
    };
    if detail {
        println!("--[folder]--   {}{}  (id {})", folder.name, lock, folder.id);
    } else {
        println!("--[folder]--   {}{}", folder.name, lock);
    }
}

pub fn print_file_row(file: &FileEntry, detail: bool) {
    let date = file
        .uploaded_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let lock = if file.is_password_protected {
        " [locked]"
    } else {
        ""
    };

    // 格式: {名称} {类别} {大小} {日期}
    if detail {
        println!(
            "{:<32} {:<10} {:>10} {}  (id {}){}",
            file.name,
            file.file_type,
            format_file_size(file.size),
            date,
            file.id,
            lock
        );
    } else {
        println!(
            "{:<32} {:<10} {:>10} {}{}",
            file.name,
            file.file_type,
            format_file_size(file.size),
            date,
            lock
        );
    }
}

/// Prints the pagination footer. A page selector is only rendered when
/// there is more than one page; a single page just reports the count.
pub fn print_page_footer(page: &Page<'_, FileEntry>) {
    if page.has_selector() {
        println!(
            "Page {} of {} ({} file(s), {} per page)",
            page.page, page.total_pages, page.total_items, page.page_size
        );
    } else {
        println!("{} file(s)", page.total_items);
    }
}

pub fn print_activity(record: &ActivityRecord) {
    println!(
        "{}  {:<10} {}  [{}]",
        record.timestamp, record.action, record.details, record.user
    );
}
