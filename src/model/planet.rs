use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
pub struct CreatePlanetDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
}
