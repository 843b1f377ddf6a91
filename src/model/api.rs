use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body used for not found and internal errors.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Message body used for rejected create requests.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub msg: String,
}

/// Confirmation body returned after a successful delete.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeletedDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

/// Listing of every API route, served at `/`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SitemapDto {
    pub routes: Vec<RouteDto>,
}
