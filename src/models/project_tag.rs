use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ValidationError;
use crate::validate::{TagRules, Validate};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE: i64 = 10_000;
const MAX_PAGE_SIZE: i64 = 100;

/// Link between a project and one of its tags.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ProjectTag {
    pub id: i64,
    pub project_id: i64,
    pub tag_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTagToProjectRequest {
    pub tag_id: i64,
}

impl Validate for AddTagToProjectRequest {
    fn validate(&self, _rules: &TagRules) -> Result<(), ValidationError> {
        if self.tag_id < 1 {
            return Err(ValidationError::OutOfRange {
                field: "tag_id",
                min: 1,
            });
        }
        Ok(())
    }
}

/// Query of the "projects carrying this tag" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsByTagParams {
    pub tag_id: i64,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ProjectsByTagParams {
    pub fn new(tag_id: i64) -> Self {
        Self {
            tag_id,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Rows to skip for the requested page. Saturates on params that never
    /// went through `validate`.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).max(0).saturating_mul(self.page_size.max(0))
    }
}

impl Validate for ProjectsByTagParams {
    fn validate(&self, _rules: &TagRules) -> Result<(), ValidationError> {
        for (field, value) in [("tag_id", self.tag_id), ("page", self.page), ("page_size", self.page_size)] {
            if value < 1 {
                return Err(ValidationError::OutOfRange { field, min: 1 });
            }
        }
        if self.page > MAX_PAGE {
            return Err(ValidationError::TooLarge {
                field: "page",
                max: MAX_PAGE,
            });
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::TooLarge {
                field: "page_size",
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(())
    }
}
