use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::view::ViewItem;

/// The type-filter dimension of a view: everything, or one category.
//
// // 视图的类型过滤维度：全部，或单一类别。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for TypeFilter {
    type Err = Infallible;

    /// "all" (any casing) selects everything; any other value selects
    /// exactly that category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(t) => f.write_str(t),
        }
    }
}

/// Keeps items whose name or type label contains the search term,
/// case-insensitively. An empty term is the identity function. Matching is
/// plain substring, not fuzzy, and never tokenizes.
///
/// Applying the same term twice yields the same result as applying it once.
//
// // 保留名称或类型标签包含搜索词的条目（不区分大小写）。
// // 空搜索词是恒等函数。匹配是普通子串匹配，不做模糊匹配，也不分词。
// //
// // 用同一搜索词过滤两次与过滤一次的结果相同（幂等）。
pub fn search_filter<'a, T: ViewItem>(items: Vec<&'a T>, term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items;
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| {
            item.display_name().to_lowercase().contains(&needle)
                || item
                    .type_label()
                    .is_some_and(|label| label.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keeps items whose type label equals the selected category,
/// case-insensitively. `TypeFilter::All` is the identity function. Items
/// without a type label pass only under `All`.
pub fn type_filter<'a, T: ViewItem>(items: Vec<&'a T>, filter: &TypeFilter) -> Vec<&'a T> {
    let wanted = match filter {
        TypeFilter::All => return items,
        TypeFilter::Only(t) => t,
    };
    items
        .into_iter()
        .filter(|item| {
            item.type_label()
                .is_some_and(|label| label.eq_ignore_ascii_case(wanted))
        })
        .collect()
}

/// The distinct, sorted set of type labels present in a collection. This
/// feeds the filter dropdown and is recomputed from the *unfiltered*
/// collection whenever it is reloaded.
pub fn available_types<T: ViewItem>(items: &[T]) -> Vec<String> {
    let set: BTreeSet<&str> = items
        .iter()
        .filter_map(ViewItem::type_label)
        .filter(|label| !label.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
