//! User data repository for database operations.
//!
//! Username uniqueness is left to the `users.username` unique index; callers translate
//! the resulting constraint violation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::now,
    model::user::{CreateUserParams, UpdateUserParams, UserType},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user and returns the stored row.
    ///
    /// # Arguments
    /// - `params` - User fields; `password` must already be hashed
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password: ActiveValue::Set(params.password),
            name: ActiveValue::Set(params.name),
            user_type: ActiveValue::Set(params.user_type.as_str().to_string()),
            avatar: ActiveValue::Set(params.avatar),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Gets all users, newest first, optionally restricted to one role tag.
    pub async fn get_all(
        &self,
        user_type: Option<UserType>,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(user_type) = user_type {
            query = query.filter(entity::user::Column::UserType.eq(user_type.as_str()));
        }

        query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to a user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = existing.clone().into();

        if let Some(username) = params.username {
            user.username = ActiveValue::Set(username);
        }
        if let Some(password) = params.password {
            user.password = ActiveValue::Set(password);
        }
        if let Some(name) = params.name {
            user.name = ActiveValue::Set(name);
        }
        if let Some(user_type) = params.user_type {
            user.user_type = ActiveValue::Set(user_type.as_str().to_string());
        }
        if let Some(avatar) = params.avatar {
            user.avatar = ActiveValue::Set(avatar);
        }

        if !user.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(user.update(self.db).await?))
    }

    /// Deletes a user, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
