use crate::server::{
    data::document::DocumentRepository,
    model::document::{CreateDocumentParams, UpdateDocumentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user_id;
mod update;

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap()
}
