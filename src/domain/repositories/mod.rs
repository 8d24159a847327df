use crate::domain::entities::{CastMemberId, CategoryId, GenreId, Video, VideoId};
use async_trait::async_trait;

/// Page of results returned by a catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Search criteria for paginated catalog listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SearchQuery {
    #[must_use]
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self { page, per_page, terms: terms.into(), sort: sort.into(), direction }
    }
}

/// Repository trait for video persistence
#[async_trait]
pub trait VideoRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a new video aggregate
    async fn create(&self, video: &Video) -> Result<(), Self::Error>;

    /// Persist the current state of an existing video aggregate
    async fn update(&self, video: &Video) -> Result<(), Self::Error>;

    /// Find a video by ID
    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>, Self::Error>;

    /// Delete a video by ID, returning whether anything was removed
    async fn delete_by_id(&self, id: &VideoId) -> Result<bool, Self::Error>;

    /// List videos matching the search criteria
    async fn find_all(&self, query: &SearchQuery) -> Result<Page<Video>, Self::Error>;
}

/// Repository trait for category reference lookups
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the subset of `ids` that exist in the catalog
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, Self::Error>;
}

/// Repository trait for genre reference lookups
#[async_trait]
pub trait GenreRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the subset of `ids` that exist in the catalog
    async fn exists_by_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>, Self::Error>;
}

/// Repository trait for cast member reference lookups
#[async_trait]
pub trait CastMemberRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the subset of `ids` that exist in the catalog
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> Result<Vec<CastMemberId>, Self::Error>;
}
