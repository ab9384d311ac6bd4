use crate::domain::entities::dataset::{PageError, PageRequest, SortDirective};

/// What the pagination controls edit. The page is kept inside
/// `[1, max(total_pages, 1)]` by every method that takes a page count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    request: PageRequest,
    sort: Option<SortDirective>,
}

impl Pager {
    pub fn new(page_size: usize) -> Result<Self, PageError> {
        Ok(Self {
            request: PageRequest::first(page_size)?,
            sort: None,
        })
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn page(&self) -> usize {
        self.request.page()
    }

    pub fn page_size(&self) -> usize {
        self.request.size()
    }

    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    pub fn can_go_previous(&self) -> bool {
        self.page() > 1
    }

    pub fn can_go_next(&self, total_pages: usize) -> bool {
        self.page() < total_pages
    }

    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.set_page(self.page() - 1);
        true
    }

    pub fn go_next(&mut self, total_pages: usize) -> bool {
        if !self.can_go_next(total_pages) {
            return false;
        }
        self.set_page(self.page() + 1);
        true
    }

    pub fn jump_to(&mut self, page: usize, total_pages: usize) {
        self.set_page(page.clamp(1, total_pages.max(1)));
    }

    /// A new size starts over from page 1.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), PageError> {
        self.request = PageRequest::first(size)?;
        Ok(())
    }

    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        self.sort = sort;
    }

    /// Back to page 1 with no sort; the page size stays.
    pub fn reset(&mut self) {
        self.set_page(1);
        self.sort = None;
    }

    fn set_page(&mut self, page: usize) {
        if let Ok(request) = PageRequest::new(page, self.page_size()) {
            self.request = request;
        }
    }
}
