use crate::server::{
    data::activity::ActivityRepository,
    model::activity::{
        ActivityEvent, CreateActivityParams, ScoreImprovementDetails,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_document_id;
mod get_by_user_id;
mod get_recent;

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}
