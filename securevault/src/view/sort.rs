//! Sorting of list-view items.
//!
//! The sort is a stable comparator sort. Descending order reverses the
//! comparator result rather than reversing the sorted list, so items with
//! equal keys keep their original relative order in *both* directions;
//! there is never a secondary key.
//
// // 列表视图条目的排序。
// //
// // 排序是稳定的比较器排序。降序是反转比较器的结果，
// // 而不是反转排好序的列表，因此键相等的条目在两个方向上
// // 都保持原有的相对顺序；永远不存在次级排序键。

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::view::ViewItem;

/// The sort key of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Case-folded name comparison.
    Name,
    /// Byte count; missing sizes count as zero.
    Size,
    /// Upload (or creation) timestamp; missing dates sort as oldest.
    #[default]
    UploadDate,
    /// Active rows before inactive ones when descending.
    Status,
    /// Storage used in gigabytes; missing counts as zero.
    StorageUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Error for sort-control values the UI passes as strings.
#[derive(Debug, thiserror::Error)]
#[error("Unknown sort value: {0}")]
pub struct ParseSortError(String);

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "size" => Ok(SortField::Size),
            "uploadDate" | "upload-date" | "date" => Ok(SortField::UploadDate),
            "status" => Ok(SortField::Status),
            "storageUsed" | "storage-used" | "storage" => Ok(SortField::StorageUsed),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Name => "name",
            SortField::Size => "size",
            SortField::UploadDate => "uploadDate",
            SortField::Status => "status",
            SortField::StorageUsed => "storageUsed",
        };
        f.write_str(s)
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Sorts a stage output in place, stably, by the given key and direction.
pub fn sort_items<T: ViewItem>(items: &mut [&T], field: SortField, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = compare_by(*a, *b, field);
        match direction {
            SortDirection::Asc => ordering,
            // Ordering::Equal 反转后仍为 Equal，稳定性不受方向影响
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by<T: ViewItem>(a: &T, b: &T, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase()),
        SortField::Size => a.byte_size().cmp(&b.byte_size()),
        SortField::UploadDate => timestamp_key(a).cmp(&timestamp_key(b)),
        SortField::Status => a.is_active().cmp(&b.is_active()),
        SortField::StorageUsed => a.storage_used().total_cmp(&b.storage_used()),
    }
}

/// Missing timestamps compare as the epoch, i.e. as the oldest entries.
fn timestamp_key<T: ViewItem>(item: &T) -> i64 {
    item.uploaded_at().map_or(0, |ts| ts.timestamp_millis())
}
