use crate::db::connect_in_memory;
use crate::{project, project_team_member, site, team_member};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

/// CRUD and relation tests for the entity layer
pub mod relation_tests;
/// Transaction and schema constraint tests
pub mod transaction_tests;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_site(db: &DatabaseConnection, name: &str) -> Result<site::Model> {
    let am = site::ActiveModel {
        site_name: Set(Some(name.to_string())),
        site_address: Set(None),
        site_state: Set(None),
        site_zip: Set(None),
        site_phone: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_project(db: &DatabaseConnection, site_id: i32, name: &str) -> Result<project::Model> {
    let am = project::ActiveModel {
        project_name: Set(Some(name.to_string())),
        project_length: Set(None),
        project_type: Set(None),
        site_id: Set(site_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_member(db: &DatabaseConnection, name: &str) -> Result<team_member::Model> {
    let am = team_member::ActiveModel {
        team_member_role: Set(Some("engineer".to_string())),
        team_member_name: Set(Some(name.to_string())),
        team_member_phone: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn test_site_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = insert_site(&db, "HQ").await?;
    assert!(created.site_id > 0);
    assert_eq!(created.site_name.as_deref(), Some("HQ"));

    let found = site::Entity::find_by_id(created.site_id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: site::ActiveModel = created.clone().into();
    am.site_zip = Set(Some("12345".into()));
    let updated = am.update(&db).await?;
    assert_eq!(updated.site_zip.as_deref(), Some("12345"));

    site::Entity::delete_by_id(created.site_id).exec(&db).await?;
    assert!(site::Entity::find_by_id(created.site_id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_orders_by_id() -> Result<()> {
    let db = setup_test_db().await?;
    let a = insert_site(&db, "a").await?;
    let b = insert_site(&db, "b").await?;

    let all = site::list(&db).await?;
    let ids: Vec<i32> = all.iter().map(|s| s.site_id).collect();
    assert_eq!(ids, vec![a.site_id, b.site_id]);

    // deleting the first leaves the second in place
    a.delete(&db).await?;
    assert_eq!(site::list(&db).await?, vec![b]);
    Ok(())
}

#[tokio::test]
async fn test_member_project_link_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Yard").await?;
    let p = insert_project(&db, s.site_id, "Tower").await?;
    let m = insert_member(&db, "Ada").await?;

    assert!(project_team_member::link(&db, p.project_id, m.team_member_id).await?);
    let members = team_member::list_by_project(&db, &p).await?;
    assert_eq!(members, vec![m.clone()]);

    let projects = m.find_related(project::Entity).all(&db).await?;
    assert_eq!(projects, vec![p]);
    Ok(())
}
