use std::ops::Range;

/// Client-side paging over an already fetched result set. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    len: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self { len, page_size }
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.len.div_ceil(self.page_size)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Indices shown on `page`, after clamping it into range.
    pub fn range(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = ((page - 1) * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        &items[self.range(page)]
    }

    pub fn has_previous(&self, page: usize) -> bool {
        self.clamp(page) > 1
    }

    pub fn has_next(&self, page: usize) -> bool {
        self.clamp(page) < self.total_pages()
    }
}
