//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a document owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, document))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_document_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::document::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let document = crate::factory::document::create_document(db, user.id).await?;

    Ok((user, document))
}

/// Creates a user, an owned document, and the document's analysis.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, document, analysis))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_analysis_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::document::Model,
        entity::analysis::Model,
    ),
    DbErr,
> {
    let (user, document) = create_document_with_owner(db).await?;
    let analysis = crate::factory::analysis::create_analysis(db, document.id).await?;

    Ok((user, document, analysis))
}
