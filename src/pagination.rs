pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Window {
    pub fn first_page() -> Self {
        Window { offset: 0, limit: QUESTIONS_PER_PAGE }
    }
}

/// 1-based page number over an id-ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Page(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn window(&self) -> Window {
        Window {
            offset: (self.0 as usize - 1) * QUESTIONS_PER_PAGE,
            limit: QUESTIONS_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_is_rejected() {
        assert!(Page::new(0).is_none());
    }

    #[test]
    fn windows_are_contiguous() {
        let first = Page::new(1).unwrap().window();
        let third = Page::new(3).unwrap().window();
        assert_eq!(first, Window::first_page());
        assert_eq!(third.offset, 20);
        assert_eq!(third.limit, QUESTIONS_PER_PAGE);
    }
}
