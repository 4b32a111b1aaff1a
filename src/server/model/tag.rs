//! Tag domain models and parameters.

use uuid::Uuid;

use crate::{model::tag::TagDto, server::error::AppError};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    /// `None` for global tags.
    pub user_id: Option<Uuid>,
    pub name: String,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
        }
    }

    pub fn is_global(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            global: self.is_global(),
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParam {
    pub user_id: Option<Uuid>,
    pub name: String,
}

/// Trims a tag name and rejects blank ones.
pub fn validate_tag_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Tag name must not be empty".to_string()));
    }
    Ok(name.to_string())
}
