use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams, UserType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_username;
mod get_all;
mod update;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password: "sha256$00$00".to_string(),
        name: "Ada Lovelace".to_string(),
        user_type: UserType::Startup,
        avatar: None,
    }
}
