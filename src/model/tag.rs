use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TagDto {
    pub id: Uuid,
    pub name: String,
    /// `true` when the tag has no owner and is visible to every user.
    pub global: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTagDto {
    pub name: String,
    #[serde(default)]
    pub global: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateTagDto {
    pub name: String,
}
