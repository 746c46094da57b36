/// One 1-indexed window over a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always within `1..=total_pages`.
    pub page: usize,
    pub page_size: usize,
    /// Never zero, even for an empty collection.
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first and last row on this page, for
    /// "Showing 11–20 of 30". `(0, 0)` when empty.
    pub fn range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        (first, first + self.items.len() - 1)
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        page_size,
        total_pages,
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::rows;
    use super::*;

    #[test]
    fn test_pages_reconstruct_collection() {
        for len in [0usize, 1, 9, 10, 11, 25, 30, 31] {
            for size in [1usize, 3, 10, 25] {
                let items = rows(len);
                let first = paginate(&items, 1, size);
                let mut rebuilt = Vec::new();
                for p in 1..=first.total_pages {
                    rebuilt.extend(paginate(&items, p, size).items);
                }
                assert_eq!(rebuilt, items, "len={} size={}", len, size);
            }
        }
    }

    #[test]
    fn test_thirty_records_three_pages() {
        let items = rows(30);
        let page = paginate(&items, 2, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id, "id-11");
        assert_eq!(page.range(), (11, 20));
        assert!(page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_out_of_range_requests_clamp() {
        let items = rows(30);
        let zero = paginate(&items, 0, 10);
        assert_eq!(zero.page, 1);
        assert!(!zero.has_prev());

        let beyond = paginate(&items, 99, 10);
        assert_eq!(beyond.page, 3);
        assert!(!beyond.has_next());
        assert_eq!(beyond.items[0].id, "id-21");
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let items = rows(0);
        let page = paginate(&items, 5, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.range(), (0, 0));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let items = rows(3);
        let page = paginate(&items, 2, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }
}
