//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed connection, which may be a pooled
//! `DatabaseConnection` or an open `DatabaseTransaction`, and converts entity rows
//! into domain models before returning them.

pub mod comment;
pub mod content;
pub mod follows;
pub mod likes;
pub mod user;

/// Whether zero-indexed `page` starts before the end of `total` rows.
///
/// Checked before asking the paginator for a page so out-of-range requests never
/// compute an overflowing offset.
pub fn page_has_rows(page: u64, per_page: u64, total: u64) -> bool {
    match page.checked_mul(per_page) {
        Some(offset) => offset < total,
        None => false,
    }
}

#[cfg(test)]
mod test;
