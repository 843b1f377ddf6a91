//! User data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::user::CreateUserParams;

/// Repository providing database operations for user accounts.
///
/// Returns entity models; the service pairs them with favorites to build the domain model.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user account.
    ///
    /// # Arguments
    /// - `params` - Account fields, optionally with an explicit id
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let id = match params.id {
            Some(id) => ActiveValue::Set(id),
            None => ActiveValue::NotSet,
        };

        entity::user::ActiveModel {
            id,
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            is_active: ActiveValue::Set(params.is_active),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(entity::user::Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets every user ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
