/// One page of a filtered, sorted collection, plus the numbers the
/// pagination controls render.
//
// // 经过过滤和排序的集合中的一页，以及分页控件需要渲染的数字。
#[derive(Debug)]
pub struct Page<'a, T> {
    /// The slice of items on this page, in pipeline order.
    pub items: Vec<&'a T>,
    /// `ceil(total_items / page_size)`; zero for an empty collection.
    pub total_pages: usize,
    /// Size of the collection before slicing.
    pub total_items: usize,
    /// The 1-based page that was requested (echoed back, never clamped).
    pub page: usize,
    pub page_size: usize,
}

impl<'a, T> Page<'a, T> {
    /// Whether the UI should render a page selector at all.
    pub fn has_selector(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slices an ordered collection into the requested 1-based page.
///
/// The page number is deliberately not clamped: every control that changes
/// a filter dimension (search term, type filter, page size, active folder)
/// resets the page to 1, and a request beyond the last page simply yields
/// an empty slice. A `page_size` of zero yields an empty page with zero
/// total pages. No input is an error.
//
// // 将有序集合切成请求的第几页（从 1 开始计数）。
// //
// // 页码有意不做钳制：每个改变过滤维度的控件
// //（搜索词、类型过滤、每页大小、当前文件夹）都会把页码重置为 1，
// // 而超出最后一页的请求只会得到空切片。
// // `page_size` 为零时得到空页、总页数为零。任何输入都不是错误。
pub fn paginate<'a, T>(items: Vec<&'a T>, page: usize, page_size: usize) -> Page<'a, T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if page == 0 || page_size == 0 || start >= total_items {
        Vec::new()
    } else {
        items[start..(start + page_size).min(total_items)].to_vec()
    };

    Page {
        items,
        total_pages,
        total_items,
        page,
        page_size,
    }
}
