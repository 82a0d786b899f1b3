/// One page of a client-side filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn slice(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let total = items.len();

        let items = items
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Page {
            items,
            total,
            page,
            page_size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
