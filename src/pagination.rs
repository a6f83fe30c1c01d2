use serde::Serialize;

/// Page cursor over a bounded collection. The page number can never leave
/// `[1, total_pages]`; an empty collection still has one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    page: u64,
    page_size: u64,
    total_items: u64,
}

impl PageCursor {
    pub fn new(page_size: u64, total_items: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Update the item count and re-clamp the page, e.g. after a refetch
    /// shrank the collection.
    pub fn set_total(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.set_page(self.page);
    }

    /// Items to skip for server-side paging of the current page.
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    /// Current page of an already-loaded collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.skip() as usize).min(items.len());
        let end = (start + self.page_size as usize).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(PageCursor::new(10, 12).total_pages(), 2);
        assert_eq!(PageCursor::new(10, 10).total_pages(), 1);
        assert_eq!(PageCursor::new(10, 11).total_pages(), 2);
        assert_eq!(PageCursor::new(5, 21).total_pages(), 5);
        assert_eq!(PageCursor::new(3, 1).total_pages(), 1);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let cursor = PageCursor::new(10, 0);
        assert_eq!(cursor.total_pages(), 1);
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_navigation_disabled_at_bounds() {
        let mut cursor = PageCursor::new(10, 12);
        assert!(!cursor.has_prev());
        assert!(cursor.has_next());

        cursor.next();
        assert_eq!(cursor.page(), 2);
        assert!(cursor.has_prev());
        assert!(!cursor.has_next());

        // next() on the last page stays put, prev() on page 1 stays put.
        cursor.next();
        assert_eq!(cursor.page(), 2);
        cursor.prev();
        cursor.prev();
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut cursor = PageCursor::new(5, 21);
        cursor.set_page(99);
        assert_eq!(cursor.page(), 5);
        cursor.set_page(0);
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_set_total_reclamps_page() {
        let mut cursor = PageCursor::new(5, 21);
        cursor.set_page(5);
        cursor.set_total(7);
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn test_skip() {
        let mut cursor = PageCursor::new(5, 21);
        assert_eq!(cursor.skip(), 0);
        cursor.set_page(3);
        assert_eq!(cursor.skip(), 10);
    }

    #[test]
    fn test_slice_last_page_is_remainder() {
        let items: Vec<u32> = (0..12).collect();
        let mut cursor = PageCursor::new(10, items.len() as u64);

        assert_eq!(cursor.slice(&items).len(), 10);
        cursor.next();
        assert_eq!(cursor.slice(&items), &[10, 11]);
    }

    #[test]
    fn test_slice_empty() {
        let items: Vec<u32> = vec![];
        let cursor = PageCursor::new(10, 0);
        assert!(cursor.slice(&items).is_empty());
    }
}
