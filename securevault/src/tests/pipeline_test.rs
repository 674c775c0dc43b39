use std::collections::HashSet;

use crate::common::id::EntryId;
use crate::tests::{file, folder, user};
use crate::view::filter::{TypeFilter, available_types, search_filter, type_filter};
use crate::view::page::paginate;
use crate::view::scope::{ancestor_chain, scope_to_folder};
use crate::view::sort::{SortDirection, SortField, sort_items};
use crate::view::{FileView, ViewState};

#[test]
fn test_folder_scoping_is_a_partition() {
    // 1. 三个作用域：根、f1、f2
    let files = vec![
        file("a", "a.txt", 1, None, "Document", 1),
        file("b", "b.txt", 2, Some("f1"), "Document", 2),
        file("c", "c.txt", 3, Some("f2"), "Document", 3),
        file("d", "d.txt", 4, Some("f1"), "Document", 4),
    ];

    let root = scope_to_folder(&files, None);
    let f1 = scope_to_folder(&files, Some(&EntryId::from("f1")));
    let f2 = scope_to_folder(&files, Some(&EntryId::from("f2")));

    // 2. 每个文件恰好出现在一个作用域中
    let mut seen = HashSet::new();
    for entry in root.iter().chain(&f1).chain(&f2) {
        assert!(seen.insert(entry.id.clone()), "{} appeared twice", entry.id);
    }
    assert_eq!(seen.len(), files.len());

    // 3. 输入顺序保持不变
    assert_eq!(f1[0].id, EntryId::from("b"));
    assert_eq!(f1[1].id, EntryId::from("d"));
}

#[test]
fn test_empty_scope_is_valid() {
    let files = vec![file("a", "a.txt", 1, None, "Document", 1)];
    let scoped = scope_to_folder(&files, Some(&EntryId::from("nope")));
    assert!(scoped.is_empty());
}

#[test]
fn test_search_filter_matches_name_and_type_case_insensitively() {
    let files = vec![
        file("a", "Report.pdf", 2048, None, "PDF", 1),
        file("b", "Photo.png", 1_048_576, None, "Image", 2),
    ];
    let scoped = scope_to_folder(&files, None);

    let by_name = search_filter(scoped.clone(), "report");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Report.pdf");

    // 搜索词也匹配类型标签
    let by_type = search_filter(scoped.clone(), "imag");
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].name, "Photo.png");

    // 空搜索词是恒等函数
    assert_eq!(search_filter(scoped, "").len(), 2);
}

#[test]
fn test_search_filter_is_idempotent() {
    let files = vec![
        file("a", "Report.pdf", 1, None, "PDF", 1),
        file("b", "Photo.png", 2, None, "Image", 2),
        file("c", "report-final.pdf", 3, None, "PDF", 3),
    ];
    let once = search_filter(scope_to_folder(&files, None), "report");
    let twice = search_filter(once.clone(), "report");

    let ids = |v: &Vec<&crate::common::entry::FileEntry>| {
        v.iter().map(|f| f.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_type_filter_exact_match_and_all_identity() {
    let files = vec![
        file("a", "a.pdf", 1, None, "PDF", 1),
        file("b", "b.png", 2, None, "Image", 2),
        file("c", "c.pdf", 3, None, "PDF", 3),
    ];
    let scoped = scope_to_folder(&files, None);

    assert_eq!(type_filter(scoped.clone(), &TypeFilter::All).len(), 3);

    let pdfs = type_filter(scoped.clone(), &TypeFilter::Only("pdf".to_string()));
    assert_eq!(pdfs.len(), 2);

    // "Image" 不是 "Images" 的子串匹配，而是整体相等
    let none = type_filter(scoped, &TypeFilter::Only("Im".to_string()));
    assert!(none.is_empty());
}

#[test]
fn test_available_types_distinct_and_sorted() {
    let files = vec![
        file("a", "a.pdf", 1, None, "PDF", 1),
        file("b", "b.png", 2, None, "Image", 2),
        file("c", "c.pdf", 3, None, "PDF", 3),
        file("d", "d", 4, None, "", 4),
    ];
    assert_eq!(available_types(&files), vec!["Image", "PDF"]);
}

#[test]
fn test_sort_by_size_descending() {
    let files = vec![
        file("a", "a", 10, None, "Other", 1),
        file("b", "b", 5, None, "Other", 2),
        file("c", "c", 20, None, "Other", 3),
    ];
    let mut items = scope_to_folder(&files, None);
    sort_items(&mut items, SortField::Size, SortDirection::Desc);
    let sizes: Vec<u64> = items.iter().map(|f| f.size).collect();
    assert_eq!(sizes, vec![20, 10, 5]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    // b 和 c 的大小相同；无论方向如何，它们都保持输入中的相对顺序
    let files = vec![
        file("a", "a", 10, None, "Other", 1),
        file("b", "b", 5, None, "Other", 2),
        file("c", "c", 5, None, "Other", 3),
        file("d", "d", 1, None, "Other", 4),
    ];

    let mut asc = scope_to_folder(&files, None);
    sort_items(&mut asc, SortField::Size, SortDirection::Asc);
    let asc_ids: Vec<&str> = asc.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(asc_ids, vec!["d", "b", "c", "a"]);

    let mut desc = scope_to_folder(&files, None);
    sort_items(&mut desc, SortField::Size, SortDirection::Desc);
    let desc_ids: Vec<&str> = desc.iter().map(|f| f.id.as_str()).collect();
    // 降序反转的是比较器而非结果列表：b 仍在 c 之前
    assert_eq!(desc_ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_sort_by_name_is_case_folded() {
    let files = vec![
        file("a", "banana.txt", 1, None, "Document", 1),
        file("b", "Apple.txt", 2, None, "Document", 2),
        file("c", "cherry.txt", 3, None, "Document", 3),
    ];
    let mut items = scope_to_folder(&files, None);
    sort_items(&mut items, SortField::Name, SortDirection::Asc);
    let names: Vec<&str> = items.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Apple.txt", "banana.txt", "cherry.txt"]);
}

#[test]
fn test_missing_upload_date_sorts_as_oldest() {
    let mut files = vec![
        file("a", "a", 1, None, "Other", 5),
        file("b", "b", 2, None, "Other", 1),
    ];
    files[1].uploaded_at = None;

    let mut items = scope_to_folder(&files, None);
    sort_items(&mut items, SortField::UploadDate, SortDirection::Asc);
    assert_eq!(items[0].id, EntryId::from("b"));
}

#[test]
fn test_sort_users_by_status_and_storage() {
    let users = vec![
        user("1", "Alice", "active", 15.2),
        user("2", "Bob", "inactive", 4.8),
        user("3", "Charlie", "active", 9.1),
    ];
    let mut by_status: Vec<&_> = users.iter().collect();
    // 降序 = 活跃在前
    sort_items(&mut by_status, SortField::Status, SortDirection::Desc);
    assert_eq!(by_status[0].name, "Alice");
    assert_eq!(by_status[2].name, "Bob");

    let mut by_storage: Vec<&_> = users.iter().collect();
    sort_items(&mut by_storage, SortField::StorageUsed, SortDirection::Desc);
    let names: Vec<&str> = by_storage.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Charlie", "Bob"]);
}

#[test]
fn test_pagination_slicing() {
    let files: Vec<_> = (0..25)
        .map(|i| file(&format!("f{}", i), &format!("file{:02}", i), i, None, "Other", 1))
        .collect();
    let items = scope_to_folder(&files, None);

    let page3 = paginate(items, 3, 10);
    assert_eq!(page3.items.len(), 5);
    assert_eq!(page3.total_pages, 3);
    assert_eq!(page3.total_items, 25);
    assert!(page3.has_selector());
}

#[test]
fn test_pagination_reconstruction() {
    let files: Vec<_> = (0..23)
        .map(|i| file(&format!("f{}", i), &format!("file{:02}", i), i, None, "Other", 1))
        .collect();
    let mut sorted = scope_to_folder(&files, None);
    sort_items(&mut sorted, SortField::Name, SortDirection::Asc);
    let expected: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();

    // 依次取出所有页并拼接，应精确还原排序后的集合
    let total_pages = paginate(sorted.clone(), 1, 7).total_pages;
    let mut rebuilt = Vec::new();
    for page_no in 1..=total_pages {
        let page = paginate(sorted.clone(), page_no, 7);
        rebuilt.extend(page.items.iter().map(|f| f.id.as_str()));
    }
    assert_eq!(rebuilt, expected);
}

#[test]
fn test_page_beyond_total_is_empty_not_an_error() {
    let files = vec![file("a", "a", 1, None, "Other", 1)];
    let page = paginate(scope_to_folder(&files, None), 9, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_selector());
}

#[test]
fn test_empty_collection_has_zero_pages() {
    let files: Vec<crate::common::entry::FileEntry> = Vec::new();
    let page = paginate(scope_to_folder(&files, None), 1, 10);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_items, 0);
    assert!(!page.has_selector());
}

#[test]
fn test_full_view_build() {
    let folders = vec![
        folder("f1", "Documents", None),
        folder("f2", "Photos", None),
        folder("f3", "Archive", Some("f1")),
    ];
    let files = vec![
        file("a", "Report.pdf", 2048, Some("f1"), "PDF", 3),
        file("b", "Photo.png", 1_048_576, None, "Image", 2),
        file("c", "Notes.txt", 512, Some("f1"), "Document", 1),
    ];

    let mut state = ViewState::new();
    state.open_folder(&EntryId::from("f1"), &folders);

    let view = FileView::build(&files, &folders, &state);
    // f1 的子文件夹与文件；默认按上传日期降序
    assert_eq!(view.folders.len(), 1);
    assert_eq!(view.folders[0].name, "Archive");
    let names: Vec<&str> = view.files.items.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Report.pdf", "Notes.txt"]);

    // 类型过滤只作用于文件，文件夹保持可见
    state.set_type_filter(TypeFilter::Only("PDF".to_string()));
    let view = FileView::build(&files, &folders, &state);
    assert_eq!(view.folders.len(), 1);
    assert_eq!(view.files.items.len(), 1);
    assert_eq!(view.files.items[0].name, "Report.pdf");
}

#[test]
fn test_ancestor_chain_is_root_first() {
    let folders = vec![
        folder("r", "Root", None),
        folder("m", "Middle", Some("r")),
        folder("l", "Leaf", Some("m")),
    ];
    let chain = ancestor_chain(&folders, &EntryId::from("l"));
    let names: Vec<&str> = chain.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Root", "Middle", "Leaf"]);
}

#[test]
fn test_ancestor_chain_survives_a_cycle() {
    // 损坏的父图：a <-> b。链会被截断而不是挂起。
    let folders = vec![
        folder("a", "A", Some("b")),
        folder("b", "B", Some("a")),
    ];
    let chain = ancestor_chain(&folders, &EntryId::from("a"));
    assert!(chain.len() <= folders.len() + 1);
}
