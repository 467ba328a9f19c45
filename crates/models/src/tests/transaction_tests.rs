use super::{insert_member, insert_project, insert_site, setup_test_db};
use crate::{project, project_team_member, site};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = site::ActiveModel { site_name: Set(Some("committed".into())), ..Default::default() }
        .insert(&txn)
        .await?;
    txn.commit().await?;

    let found = site::Entity::find_by_id(created.site_id).one(&db).await?;
    assert_eq!(found.and_then(|s| s.site_name).as_deref(), Some("committed"));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = site::ActiveModel { site_name: Set(Some("discarded".into())), ..Default::default() }
        .insert(&txn)
        .await?;
    txn.rollback().await?;

    assert!(site::Entity::find_by_id(created.site_id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_project_without_site_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(insert_project(&db, 404, "orphan").await.is_err());
    assert_eq!(project::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Deleting a site straight through the entity still clears dependants via the FK cascade.
#[tokio::test]
async fn test_site_delete_cascades_in_schema() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Pier").await?;
    let p = insert_project(&db, s.site_id, "Deck").await?;
    let m = insert_member(&db, "Kai").await?;
    project_team_member::link(&db, p.project_id, m.team_member_id).await?;

    site::Entity::delete_by_id(s.site_id).exec(&db).await?;

    assert_eq!(project::Entity::find().count(&db).await?, 0);
    assert_eq!(project_team_member::count_for_team_member(&db, m.team_member_id).await?, 0);
    Ok(())
}
