/// One page out of a longer list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Slice `items` into pages of `per_page` and keep page `page` (1-based).
    ///
    /// Returns `None` when the page is out of range. An empty list still has
    /// one (empty) first page.
    pub fn paginate(items: Vec<T>, per_page: usize, page: usize) -> Option<Self> {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page).max(1);

        if page == 0 || page > total_pages {
            return None;
        }

        let items = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Some(Page {
            items,
            current_page: page,
            total_pages,
            total_items,
        })
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }
}
