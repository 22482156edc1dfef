//! User domain models and parameters.
//!
//! Users carry a role tag that decides how the client presents them. The stored password
//! digest never leaves the data layer: the `User` domain model has no field for it.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserTypeDto},
    server::error::internal::InternalError,
};

/// Role tag attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Startup,
    Investor,
    Partner,
    Admin,
}

impl UserType {
    /// Stored and wire representation of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Investor => "investor",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "startup" => Some(Self::Startup),
            "investor" => Some(Self::Investor),
            "partner" => Some(Self::Partner),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn from_dto(dto: UserTypeDto) -> Self {
        match dto {
            UserTypeDto::Startup => Self::Startup,
            UserTypeDto::Investor => Self::Investor,
            UserTypeDto::Partner => Self::Partner,
            UserTypeDto::Admin => Self::Admin,
        }
    }

    pub fn into_dto(self) -> UserTypeDto {
        match self {
            Self::Startup => UserTypeDto::Startup,
            Self::Investor => UserTypeDto::Investor,
            Self::Partner => UserTypeDto::Partner,
            Self::Admin => UserTypeDto::Admin,
        }
    }
}

/// Account without its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Globally unique login handle.
    pub username: String,
    pub name: String,
    pub user_type: UserType,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password digest.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(InternalError::UnknownEnumValue)` - Stored role tag is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        let user_type =
            UserType::parse(&entity.user_type).ok_or(InternalError::UnknownEnumValue {
                column: "users.user_type",
                value: entity.user_type.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            user_type,
            avatar: entity.avatar,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            user_type: self.user_type.into_dto(),
            avatar: self.avatar,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    /// Plain secret from the request; the service replaces it with its digest.
    pub password: String,
    pub name: String,
    pub user_type: UserType,
    pub avatar: Option<String>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            name: dto.name,
            user_type: UserType::from_dto(dto.user_type),
            avatar: dto.avatar,
        }
    }
}

/// Parameters for a partial user update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub user_type: Option<UserType>,
    /// `Some(None)` clears the avatar.
    pub avatar: Option<Option<String>>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            name: dto.name,
            user_type: dto.user_type.map(UserType::from_dto),
            avatar: dto.avatar,
        }
    }
}
