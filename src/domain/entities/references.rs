use crate::domain::Identifier;
use serde::{Deserialize, Serialize};

/// Unique identifier for categories managed by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

impl CategoryId {
    #[must_use]
    pub fn unique() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Identifier for CategoryId {
    fn value(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for genres managed by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenreId(String);

impl GenreId {
    #[must_use]
    pub fn unique() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GenreId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GenreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Identifier for GenreId {
    fn value(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for cast members managed by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastMemberId(String);

impl CastMemberId {
    #[must_use]
    pub fn unique() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CastMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CastMemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CastMemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Identifier for CastMemberId {
    fn value(&self) -> &str {
        &self.0
    }
}
