#[cfg(test)]
pub mod mocks {
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    use crate::application::error::AppError;
    use crate::domain::{
        entities::{CastMemberId, CategoryId, GenreId, Video, VideoId},
        repositories::{
            CastMemberRepository, CategoryRepository, GenreRepository, Page, SearchQuery,
            VideoRepository,
        },
        value_objects::{AudioVideoMedia, ImageMedia, Resource, VideoMediaType, VideoResource},
    };
    use crate::infrastructure::storage::{
        FilesystemMediaStorage, MediaResourceGateway, StorageError,
    };

    fn simulated_failure(operation: &str) -> AppError {
        AppError::internal(
            format!("simulated {operation} failure"),
            std::io::Error::other("simulated failure"),
        )
    }

    /// Simple in-memory mock repository for testing
    #[derive(Clone, Default)]
    pub struct InMemoryVideoRepository {
        storage: Arc<Mutex<HashMap<VideoId, Video>>>,
        fail_on_create: bool,
        fail_on_update: bool,
    }

    impl InMemoryVideoRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn with_video(self, video: Video) -> Self {
            {
                let mut storage = self.storage.lock().unwrap();
                storage.insert(video.id.clone(), video);
            }
            self
        }

        /// Make `create` return an error, for failure-path tests
        #[must_use]
        pub fn failing_on_create(mut self) -> Self {
            self.fail_on_create = true;
            self
        }

        /// Make `update` return an error, for failure-path tests
        #[must_use]
        pub fn failing_on_update(mut self) -> Self {
            self.fail_on_update = true;
            self
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn stored(&self, id: &VideoId) -> Option<Video> {
            self.storage.lock().unwrap().get(id).cloned()
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn stored_ids(&self) -> Vec<VideoId> {
            self.storage.lock().unwrap().keys().cloned().collect()
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn len(&self) -> usize {
            self.storage.lock().unwrap().len()
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl VideoRepository for InMemoryVideoRepository {
        type Error = AppError;

        async fn create(&self, video: &Video) -> Result<(), Self::Error> {
            if self.fail_on_create {
                return Err(simulated_failure("create"));
            }
            let mut storage = self.storage.lock().unwrap();
            storage.insert(video.id.clone(), video.clone());
            Ok(())
        }

        async fn update(&self, video: &Video) -> Result<(), Self::Error> {
            if self.fail_on_update {
                return Err(simulated_failure("update"));
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

    /// Media gateway wrapper that counts calls and can fail a chosen slot
    #[derive(Clone)]
    pub struct CountingMediaStorage {
        inner: FilesystemMediaStorage,
        fail_on: Option<VideoMediaType>,
        store_calls: Arc<Mutex<u32>>,
        clear_calls: Arc<Mutex<u32>>,
    }

    impl CountingMediaStorage {
        pub fn new(base_path: impl Into<std::path::PathBuf>) -> Self {
            Self {
                inner: FilesystemMediaStorage::new(base_path),
                fail_on: None,
                store_calls: Arc::new(Mutex::new(0)),
                clear_calls: Arc::new(Mutex::new(0)),
            }
        }

        /// Make stores for the given slot fail, for compensation tests
        #[must_use]
        pub fn failing_on(mut self, media_type: VideoMediaType) -> Self {
            self.fail_on = Some(media_type);
            self
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn store_calls(&self) -> u32 {
            *self.store_calls.lock().unwrap()
        }

        /// # Panics
        /// Panics if the internal mutex is poisoned
        #[must_use]
        pub fn clear_calls(&self) -> u32 {
            *self.clear_calls.lock().unwrap()
        }

        fn record_store(&self, media_type: VideoMediaType) -> Result<(), StorageError> {
            *self.store_calls.lock().unwrap() += 1;
            if self.fail_on == Some(media_type) {
                return Err(StorageError::IoError {
                    message: format!("simulated {media_type} store failure"),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl MediaResourceGateway for CountingMediaStorage {
        async fn store_audio_video(
            &self,
            video_id: &VideoId,
            resource: &VideoResource,
        ) -> Result<AudioVideoMedia, StorageError> {
            self.record_store(resource.media_type())?;
            self.inner.store_audio_video(video_id, resource).await
        }

        async fn store_image(
            &self,
            video_id: &VideoId,
            resource: &VideoResource,
        ) -> Result<ImageMedia, StorageError> {
            self.record_store(resource.media_type())?;
            self.inner.store_image(video_id, resource).await
        }

        async fn get_resource(
            &self,
            video_id: &VideoId,
            media_type: VideoMediaType,
        ) -> Result<Option<Resource>, StorageError> {
            self.inner.get_resource(video_id, media_type).await
        }

        async fn clear_resources(&self, video_id: &VideoId) -> Result<(), StorageError> {
            *self.clear_calls.lock().unwrap() += 1;
            self.inner.clear_resources(video_id).await
        }
    }

    /// In-memory category lookup seeded with known ids
    #[derive(Clone, Default)]
    pub struct InMemoryCategoryRepository {
        known: HashSet<CategoryId>,
    }

    impl InMemoryCategoryRepository {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_ids(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
            self.known.extend(ids);
            self
        }
    }

    #[async_trait]
    impl CategoryRepository for InMemoryCategoryRepository {
        type Error = AppError;

        async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, Self::Error> {
            Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
        }
    }

    /// In-memory genre lookup seeded with known ids
    #[derive(Clone, Default)]
    pub struct InMemoryGenreRepository {
        known: HashSet<GenreId>,
    }

    impl InMemoryGenreRepository {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_ids(mut self, ids: impl IntoIterator<Item = GenreId>) -> Self {
            self.known.extend(ids);
            self
        }
    }

    #[async_trait]
    impl GenreRepository for InMemoryGenreRepository {
        type Error = AppError;

        async fn exists_by_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>, Self::Error> {
            Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
        }
    }

    /// In-memory cast member lookup seeded with known ids
    #[derive(Clone, Default)]
    pub struct InMemoryCastMemberRepository {
        known: HashSet<CastMemberId>,
    }

    impl InMemoryCastMemberRepository {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_ids(mut self, ids: impl IntoIterator<Item = CastMemberId>) -> Self {
            self.known.extend(ids);
            self
        }
    }

    #[async_trait]
    impl CastMemberRepository for InMemoryCastMemberRepository {
        type Error = AppError;

        async fn exists_by_ids(
            &self,
            ids: &[CastMemberId],
        ) -> Result<Vec<CastMemberId>, Self::Error> {
            Ok(ids.iter().filter(|id| self.known.contains(id)).cloned().collect())
        }
    }
}
