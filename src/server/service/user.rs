use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User, UserType},
    util::password::hash_password,
};

const USERNAME_TAKEN: &str = "Username already exists";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, storing a salted digest of the submitted password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Username is already taken
    /// - `Err(AppError::DbErr)` - Any other store failure
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        tracing::debug!(username = %params.username, "Creating user");

        let params = CreateUserParams {
            password: hash_password(&params.password),
            ..params
        };

        let user = UserRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USERNAME_TAKEN))
            .inspect_err(|e| tracing::error!("Failed to create user: {}", e))?;

        Ok(User::from_entity(user)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        tracing::debug!(id, "Fetching user");

        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch user {}: {}", id, e))?
            .ok_or_else(|| user_not_found(id))?;

        Ok(User::from_entity(user)?)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        tracing::debug!(username, "Fetching user by username");

        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch user '{}': {}", username, e))?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

        Ok(User::from_entity(user)?)
    }

    /// Lists users newest first, optionally restricted to one role.
    pub async fn list(&self, user_type: Option<UserType>) -> Result<Vec<User>, AppError> {
        tracing::debug!(user_type = ?user_type, "Listing users");

        let users = UserRepository::new(self.db)
            .get_all(user_type)
            .await
            .inspect_err(|e| tracing::error!("Failed to list users: {}", e))?;

        users
            .into_iter()
            .map(|u| User::from_entity(u).map_err(Into::into))
            .collect()
    }

    /// Applies a partial update; a new password is hashed before it is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - New username is already taken
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        tracing::debug!(id, "Updating user");

        let params = UpdateUserParams {
            password: params.password.as_deref().map(hash_password),
            ..params
        };

        let user = UserRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USERNAME_TAKEN))
            .inspect_err(|e| tracing::error!("Failed to update user {}: {}", id, e))?
            .ok_or_else(|| user_not_found(id))?;

        Ok(User::from_entity(user)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "Deleting user");

        let deleted = UserRepository::new(self.db)
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete user {}: {}", id, e))?;

        if !deleted {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn params(username: &str) -> CreateUserParams {
        CreateUserParams {
            username: username.to_string(),
            password: "correct horse battery staple".to_string(),
            name: "Ada".to_string(),
            user_type: UserType::Investor,
            avatar: None,
        }
    }

    /// Expected: stored password is a digest, never the submitted secret
    #[tokio::test]
    async fn create_stores_hashed_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserService::new(db).create(params("ada")).await.unwrap();

        let stored = entity::prelude::User::find_by_id(user.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "correct horse battery staple");
        assert!(stored.password.starts_with("sha256$"));
    }

    /// Expected: Err(AppError::Conflict) for a taken username
    #[tokio::test]
    async fn create_reports_conflict_for_taken_username() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        service.create(params("ada")).await.unwrap();

        let result = service.create(params("ada")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Expected: Err(AppError::Conflict) when renaming onto an existing username
    #[tokio::test]
    async fn update_reports_conflict_for_taken_username() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::user::UserFactory::new(db)
            .username("taken")
            .build()
            .await
            .unwrap();
        let user = factory::create_user(db).await.unwrap();

        let result = UserService::new(db)
            .update(
                user.id,
                UpdateUserParams {
                    username: Some("taken".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);

        assert!(matches!(
            service.get_by_id(99).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_by_username("nobody").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update(99, UpdateUserParams::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(99).await, Err(AppError::NotFound(_))));
    }

    /// Expected: Err(AppError::InternalErr) for a role tag the application does not know
    #[tokio::test]
    async fn unknown_stored_role_is_internal_error() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .user_type("wizard")
            .build()
            .await
            .unwrap();

        let result = UserService::new(db).get_by_id(user.id).await;

        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }
}
