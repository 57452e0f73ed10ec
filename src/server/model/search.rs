use crate::{
    model::search::{ContentSearchResultDto, UserSearchResultDto},
    server::model::content::Content,
};

/// One page of an in-memory search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
}

impl SearchPage<String> {
    pub fn into_dto(self) -> UserSearchResultDto {
        UserSearchResultDto {
            total_users: self.total,
            total_pages: self.total_pages,
            current_page: self.page,
            users: self.items,
        }
    }
}

impl SearchPage<Content> {
    pub fn into_dto(self) -> ContentSearchResultDto {
        ContentSearchResultDto {
            total_content: self.total,
            total_pages: self.total_pages,
            current_page: self.page,
            content: self
                .items
                .into_iter()
                .map(Content::into_search_dto)
                .collect(),
        }
    }
}
