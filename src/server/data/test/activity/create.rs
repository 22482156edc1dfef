use super::*;
use crate::server::model::activity::Activity;

/// Tests appending an activity.
///
/// Verifies that the kind tag and typed details are stored and read back intact.
///
/// Expected: Ok with the same event
#[tokio::test]
async fn creates_activity_with_typed_details() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, document) = factory::helpers::create_document_with_owner(db).await?;
    let event = ActivityEvent::ScoreImprovement(ScoreImprovementDetails {
        previous_score: 61,
        new_score: 74,
    });

    let stored = ActivityRepository::new(db)
        .create(CreateActivityParams {
            user_id: user.id,
            document_id: Some(document.id),
            event: event.clone(),
        })
        .await?;

    assert_eq!(stored.activity_type, "score_improvement");

    let activity = Activity::from_entity(stored).unwrap();
    assert_eq!(activity.event, event);
    assert_eq!(activity.document_id, Some(document.id));

    Ok(())
}

/// Tests deleting an activity twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_activity_once() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let activity = factory::create_activity(db, user.id).await?;
    let repo = ActivityRepository::new(db);

    assert!(repo.delete(activity.id).await?);
    assert!(repo.find_by_id(activity.id).await?.is_none());
    assert!(!repo.delete(activity.id).await?);

    Ok(())
}
