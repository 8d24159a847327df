use std::collections::HashSet;

use video_catalog_service::domain::{
    entities::{CastMemberId, CategoryId, GenreId, Video},
    value_objects::Rating,
};

pub struct VideoBuilder {
    title: String,
    description: String,
    launched_at: Option<i32>,
    duration: f64,
    rating: Option<Rating>,
    opened: bool,
    published: bool,
    categories: HashSet<CategoryId>,
    genres: HashSet<GenreId>,
    cast_members: HashSet<CastMemberId>,
}

impl VideoBuilder {
    pub fn new() -> Self {
        Self {
            title: "System Design Interviews".to_string(),
            description: "An in-depth dive into distributed systems".to_string(),
            launched_at: Some(2022),
            duration: 120.0,
            rating: Some(Rating::L),
            opened: true,
            published: false,
            categories: HashSet::new(),
            genres: HashSet::new(),
            cast_members: HashSet::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.genres.extend(genres);
        self
    }

    pub fn with_cast_members(
        mut self,
        cast_members: impl IntoIterator<Item = CastMemberId>,
    ) -> Self {
        self.cast_members.extend(cast_members);
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Video {
        Video::new_video(
            self.title,
            self.description,
            self.launched_at,
            self.duration,
            self.rating,
            self.opened,
            self.published,
            self.categories,
            self.genres,
            self.cast_members,
        )
    }
}

impl Default for VideoBuilder {
    fn default() -> Self {
        Self::new()
    }
}
