use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteDto;

/// Public view of a user. The password never leaves the server.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub favorite: Vec<FavoriteDto>,
}
