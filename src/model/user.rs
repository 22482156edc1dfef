use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::present;

/// Role tag attached to every account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserTypeDto {
    Startup,
    Investor,
    Partner,
    Admin,
}

/// Public view of a user. Carries no password field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub user_type: UserTypeDto,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub name: String,
    pub user_type: UserTypeDto,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserTypeDto>,
    /// `null` clears the avatar.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserListResponseDto {
    pub users: Vec<UserDto>,
}
