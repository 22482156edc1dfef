use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserListResponseDto, UserResponseDto},
    },
    server::{
        controller::{
            param::UserListParam,
            response::{created, no_content, ok},
        },
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        schema::Validated,
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 400, description = "Invalid user payload", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let user = UserService::new(&db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok(created(UserResponseDto {
        user: user.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("userType" = Option<String>, Query, description = "Only users with this role")
    ),
    responses(
        (status = 200, description = "Users, newest first", body = UserListResponseDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(param): Query<UserListParam>,
) -> Result<impl IntoResponse, AppError> {
    let user_type = param.user_type()?;
    let db = state.gateway.connection().await?;

    let users = UserService::new(&db).list(user_type).await?;

    Ok(ok(UserListResponseDto {
        users: users.into_iter().map(|u| u.into_dto()).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let user = UserService::new(&db).get_by_id(id).await?;

    Ok(ok(UserResponseDto {
        user: user.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/username/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Login handle")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let user = UserService::new(&db).get_by_username(&username).await?;

    Ok(ok(UserResponseDto {
        user: user.into_dto(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponseDto),
        (status = 400, description = "Invalid user payload or ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(payload): Validated<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let user = UserService::new(&db)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok(ok(UserResponseDto {
        user: user.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    UserService::new(&db).delete(id).await?;

    Ok(no_content())
}
