use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use video_catalog_service::domain::{
    entities::{CastMemberId, CategoryId, GenreId, Video, VideoId},
    repositories::{
        CastMemberRepository, CategoryRepository, GenreRepository, Page, SearchQuery,
        VideoRepository,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Simulated {0} failure")]
    Simulated(&'static str),
}

#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    storage: Arc<Mutex<HashMap<VideoId, Video>>>,
    fail_on_update: bool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video(self, video: Video) -> Self {
        {
            let mut storage = self.storage.lock().unwrap();
            storage.insert(video.id.clone(), video);
        }
        self
    }

    pub fn failing_on_update(mut self) -> Self {
        self.fail_on_update = true;
        self
    }

    pub fn stored(&self, id: &VideoId) -> Option<Video> {
        self.storage.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    type Error = RepositoryError;

    async fn create(&self, video: &Video) -> Result<(), Self::Error> {
        let mut storage = self.storage.lock().unwrap();
        storage.insert(video.id.clone(), video.clone());
        Ok(())
    }

    async fn update(&self, video: &Video) -> Result<(), Self::Error> {
        if self.fail_on_update {
            return Err(RepositoryError::Simulated("update"));
        }
        let mut storage = self.storage.lock().unwrap();
        storage.insert(video.id.clone(), video.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>, Self::Error> {
        let storage = self.storage.lock().unwrap();
        Ok(storage.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &VideoId) -> Result<bool, Self::Error> {
        let mut storage = self.storage.lock().unwrap();
        Ok(storage.remove(id).is_some())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Page<Video>, Self::Error> {
        let storage = self.storage.lock().unwrap();
        let terms = query.terms.to_lowercase();
        let mut items: Vec<Video> = storage
            .values()
            .filter(|video| terms.is_empty() || video.title.to_lowercase().contains(&terms))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));

        let total = items.len() as u64;
        let skip = (query.page.saturating_sub(1) * query.per_page) as usize;
        let items: Vec<Video> =
            items.into_iter().skip(skip).take(query.per_page as usize).collect();

        Ok(Page { current_page: query.page, per_page: query.per_page, total, items })
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    known: HashSet<CategoryId>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.known.extend(ids);
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    type Error = RepositoryError;

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, Self::Error> {
        Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGenreRepository {
    known: HashSet<GenreId>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = GenreId>) -> Self {
        self.known.extend(ids);
        self
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    type Error = RepositoryError;

    async fn exists_by_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>, Self::Error> {
        Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCastMemberRepository {
    known: HashSet<CastMemberId>,
}

impl InMemoryCastMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = CastMemberId>) -> Self {
        self.known.extend(ids);
        self
    }
}

#[async_trait]
impl CastMemberRepository for InMemoryCastMemberRepository {
    type Error = RepositoryError;

    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> Result<Vec<CastMemberId>, Self::Error> {
        Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
    }
}
