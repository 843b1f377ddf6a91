use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct WarriorDto {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub rank: Option<String>,
}

/// All three fields are required to be non-empty; they are optional here so that a missing
/// field is reported as a 400 with a message rather than a deserialization failure.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
pub struct CreateWarriorDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}
