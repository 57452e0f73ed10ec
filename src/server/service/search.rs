//! Username and title search.
//!
//! Matches are collected in full, sorted case-insensitively and then paged in memory.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{content::ContentRepository, user::UserRepository},
    error::AppError,
    model::{content::Content, search::SearchPage},
    util::pagination::{Page, CONTENT_PER_PAGE},
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active usernames containing `fragment`, ignoring case.
    pub async fn users(&self, fragment: &str, page: i64) -> Result<SearchPage<String>, AppError> {
        let page = Page::new(page, CONTENT_PER_PAGE)?;

        let mut usernames = UserRepository::new(self.db)
            .search_usernames(fragment)
            .await?;
        usernames.sort_by_key(|u| u.to_lowercase());

        paged(page, usernames)
    }

    /// Posts whose title contains `query`, ignoring case.
    ///
    /// A query made only of digits is treated as a post id instead.
    pub async fn content(&self, query: &str, page: i64) -> Result<SearchPage<Content>, AppError> {
        let page = Page::new(page, CONTENT_PER_PAGE)?;
        let content_repo = ContentRepository::new(self.db);

        let mut posts = if is_post_id(query) {
            match query.parse::<i32>() {
                Ok(c_id) => content_repo.find_by_id(c_id).await?.into_iter().collect(),
                Err(_) => Vec::new(),
            }
        } else {
            content_repo.search_by_title(query).await?
        };
        posts.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then(a.c_id.cmp(&b.c_id))
        });

        paged(page, posts)
    }
}

fn is_post_id(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

fn paged<T: Clone>(page: Page, items: Vec<T>) -> Result<SearchPage<T>, AppError> {
    let total = items.len() as u64;
    let total_pages = page.check_in_range(total)?;

    Ok(SearchPage {
        items: page.slice(&items).to_vec(),
        total,
        total_pages,
        page: page.number,
    })
}
