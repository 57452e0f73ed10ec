//! One-based page arithmetic shared by every listing endpoint.

use crate::server::error::AppError;

/// Users per page on `/get_users`.
pub const USERS_PER_PAGE: u64 = 3;
/// Posts or search hits per page.
pub const CONTENT_PER_PAGE: u64 = 6;

/// A validated one-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    pub per_page: u64,
}

impl Page {
    /// Rejects page numbers below 1.
    pub fn new(number: i64, per_page: u64) -> Result<Self, AppError> {
        if number < 1 {
            return Err(AppError::BadRequest(
                "Page number must be 1 or greater".to_string(),
            ));
        }

        Ok(Self {
            number: number as u64,
            per_page,
        })
    }

    /// Zero-based index for SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.number - 1
    }

    /// Number of items before this page, saturating for very large page numbers.
    pub fn offset(&self) -> usize {
        usize::try_from(self.index().saturating_mul(self.per_page)).unwrap_or(usize::MAX)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }

    /// Fails when the page lies past the end of a non-empty result set.
    ///
    /// # Returns
    /// - `Ok(total_pages)` - Page is in range (any page is fine when `total` is 0)
    /// - `Err(AppError::BadRequest)` - Page exceeds the number of pages
    pub fn check_in_range(&self, total: u64) -> Result<u64, AppError> {
        let total_pages = self.total_pages(total);

        if total > 0 && self.number > total_pages {
            return Err(AppError::BadRequest("Invalid choice of page".to_string()));
        }

        Ok(total_pages)
    }

    /// Returns this page's slice of an in-memory result set.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start
            .saturating_add(usize::try_from(self.per_page).unwrap_or(usize::MAX))
            .min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_page_below_one() {
        assert!(matches!(Page::new(0, 3), Err(AppError::BadRequest(_))));
        assert!(matches!(Page::new(-2, 3), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rounds_total_pages_up() {
        let page = Page::new(1, 3).unwrap();

        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(3), 1);
        assert_eq!(page.total_pages(7), 3);
    }

    #[test]
    fn rejects_page_past_end_only_when_non_empty() {
        let page = Page::new(3, 6).unwrap();

        assert!(page.check_in_range(0).is_ok());
        assert!(page.check_in_range(13).is_ok());
        let err = page.check_in_range(12).unwrap_err();
        assert_eq!(err.to_string(), "Invalid choice of page");
    }

    #[test]
    fn slices_requested_page() {
        let items: Vec<u32> = (1..=8).collect();

        assert_eq!(Page::new(1, 3).unwrap().slice(&items), &[1, 2, 3]);
        assert_eq!(Page::new(3, 3).unwrap().slice(&items), &[7, 8]);
        assert!(Page::new(4, 3).unwrap().slice(&items).is_empty());
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let page = Page::new(i64::MAX, 6).unwrap();
        let items: Vec<u32> = (1..=8).collect();

        assert_eq!(page.offset(), usize::MAX);
        assert!(page.slice(&items).is_empty());
        assert!(page.slice::<u32>(&[]).is_empty());
        assert_eq!(page.check_in_range(0).unwrap(), 0);
        assert!(page.check_in_range(8).is_err());
    }
}
