use crate::domain::MembersPage;

/// Rows requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Page numbers shown at once in the navigation bar.
pub const PAGE_BLOCK: u32 = 10;

/// The block of page numbers containing `current_page`.
///
/// Blocks are fixed: pages 1-10, 11-20, and so on, truncated at
/// `total_pages`. A page of 0 is treated as page 1.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    let current = current_page.max(1);
    let block = current.div_ceil(PAGE_BLOCK);
    let start = (block - 1) * PAGE_BLOCK + 1;
    let end = block.saturating_mul(PAGE_BLOCK).min(total_pages);
    (start..=end).collect()
}

/// Number of rows a page should hold given the total element count.
pub fn expected_rows(page: u32, size: u32, total_elements: u64) -> usize {
    let offset = u64::from(page.saturating_sub(1)) * u64::from(size);
    total_elements
        .checked_sub(offset)
        .map(|remaining| remaining.min(u64::from(size)) as usize)
        .unwrap_or(0)
}

/// Navigation controls derived from the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
    pub window: Vec<u32>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub show_jump_first: bool,
    pub show_jump_last: bool,
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let current_page = current_page.max(1);
        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;
        Self {
            current_page,
            total_pages,
            window: page_window(current_page, total_pages),
            previous_enabled: has_previous,
            next_enabled: has_next,
            show_jump_first: has_previous,
            show_jump_last: has_next,
        }
    }

    pub fn for_page(page: Option<&MembersPage>) -> Self {
        match page {
            Some(p) => Self::new(p.current_page, p.total_pages),
            None => Self::new(1, 0),
        }
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.current_page == page
    }

    /// Clamps a requested page into the navigable range.
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }
}
