/// The request cursor for one page fetch.
///
/// Pages are 1-based, matching the usual `?page=N` query convention. The
/// loader bumps `page` by exactly 1 after each successful fetch and never
/// skips or revisits pages on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// The page index to request, starting at 1.
    pub page: u32,
    /// How many items to request per page.
    pub per_page: u32,
}

/// One fetched page, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items of this page, in server order.
    pub items: Vec<T>,
    /// The page index the server says this is.
    pub page: u32,
    /// The total number of pages the server says exist.
    pub pages: u32,
}

impl<T> Page<T> {
    /// Whether the server reports pages beyond this one.
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }
}
