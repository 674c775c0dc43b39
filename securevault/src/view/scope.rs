use crate::common::entry::FolderEntry;
use crate::common::id::EntryId;
use crate::view::ViewItem;

/// Restricts a collection to the items directly inside one folder.
///
/// `current` of `None` selects the root scope. Every item lands in exactly
/// one scope (its parent reference points at one folder or at the root),
/// so the scopes partition the collection. Single pass, input order kept,
/// an empty result is a valid outcome.
//
// // 将集合限制为直接位于某个文件夹内的条目。
// //
// // `current` 为 `None` 时选择根作用域。每个条目恰好落在一个作用域中
// //（其父引用要么指向某个文件夹，要么指向根），
// // 因此各作用域构成集合的一个划分。单次遍历，保持输入顺序，
// // 空结果是合法输出而非错误。
pub fn scope_to_folder<'a, T: ViewItem>(
    items: &'a [T],
    current: Option<&EntryId>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.parent_folder_id() == current)
        .collect()
}

/// Walks the parent references from `id` up to its root and returns the
/// chain root-first. This is the breadcrumb for an open folder.
///
/// The backend guarantees the parent graph is a forest; the walk is still
/// bounded by the collection size so a corrupt cycle degrades into a
/// truncated chain instead of a hang.
pub fn ancestor_chain<'a>(folders: &'a [FolderEntry], id: &EntryId) -> Vec<&'a FolderEntry> {
    let mut chain = Vec::new();
    let mut cursor = folders.iter().find(|f| f.id == *id);
    let mut remaining = folders.len();

    while let Some(folder) = cursor {
        chain.push(folder);
        if remaining == 0 {
            break;
        }
        remaining -= 1;
        cursor = folder
            .parent_folder_id
            .as_ref()
            .and_then(|pid| folders.iter().find(|f| f.id == *pid));
    }

    chain.reverse();
    chain
}
