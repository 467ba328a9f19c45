use super::{insert_member, insert_project, insert_site, setup_test_db};
use crate::{project, project_team_member, site, team_member};
use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, Set};

/// Linking the same pair twice keeps one association row
#[tokio::test]
async fn test_link_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Yard").await?;
    let p = insert_project(&db, s.site_id, "Tower").await?;
    let m = insert_member(&db, "Ada").await?;

    assert!(project_team_member::link(&db, p.project_id, m.team_member_id).await?);
    assert!(!project_team_member::link(&db, p.project_id, m.team_member_id).await?);
    assert_eq!(project_team_member::count_for_team_member(&db, m.team_member_id).await?, 1);
    Ok(())
}

/// A row written by another writer between calls is treated as already linked
#[tokio::test]
async fn test_link_over_existing_row_does_not_error() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Dock").await?;
    let p = insert_project(&db, s.site_id, "Crane").await?;
    let m = insert_member(&db, "Ilse").await?;

    let row = project_team_member::ActiveModel {
        project_id: Set(p.project_id),
        team_member_id: Set(m.team_member_id),
    };
    project_team_member::Entity::insert(row).exec_without_returning(&db).await?;

    assert!(!project_team_member::link(&db, p.project_id, m.team_member_id).await?);
    assert_eq!(project_team_member::count_for_team_member(&db, m.team_member_id).await?, 1);
    Ok(())
}

/// Projects are listed per owning site
#[tokio::test]
async fn test_projects_by_site() -> Result<()> {
    let db = setup_test_db().await?;
    let s1 = insert_site(&db, "North").await?;
    let s2 = insert_site(&db, "South").await?;
    let p1 = insert_project(&db, s1.site_id, "Bridge").await?;
    let p2 = insert_project(&db, s2.site_id, "Tunnel").await?;
    let p3 = insert_project(&db, s1.site_id, "Road").await?;

    let north = project::list_by_site(&db, s1.site_id).await?;
    assert_eq!(north, vec![p1.clone(), p3.clone()]);
    let via_relation = s1.find_related(project::Entity).all(&db).await?;
    assert_eq!(via_relation.len(), 2);
    assert_eq!(project::list_by_site(&db, s2.site_id).await?, vec![p2]);

    let owner = p3.find_related(site::Entity).one(&db).await?;
    assert_eq!(owner, Some(s1));
    Ok(())
}

/// Unlinking a member strips it from every project but keeps the projects
#[tokio::test]
async fn test_unlink_team_member() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Yard").await?;
    let p1 = insert_project(&db, s.site_id, "Tower").await?;
    let p2 = insert_project(&db, s.site_id, "Annex").await?;
    let m = insert_member(&db, "Ada").await?;
    let other = insert_member(&db, "Grace").await?;

    project_team_member::link(&db, p1.project_id, m.team_member_id).await?;
    project_team_member::link(&db, p2.project_id, m.team_member_id).await?;
    project_team_member::link(&db, p2.project_id, other.team_member_id).await?;

    let removed = project_team_member::unlink_team_member(&db, m.team_member_id).await?;
    assert_eq!(removed, 2);
    assert!(team_member::list_by_project(&db, &p1).await?.is_empty());
    assert_eq!(team_member::list_by_project(&db, &p2).await?, vec![other]);
    assert_eq!(project::list(&db).await?.len(), 2);
    Ok(())
}

/// Emptying member sets of several projects at once
#[tokio::test]
async fn test_unlink_projects() -> Result<()> {
    let db = setup_test_db().await?;
    let s = insert_site(&db, "Yard").await?;
    let p1 = insert_project(&db, s.site_id, "Tower").await?;
    let p2 = insert_project(&db, s.site_id, "Annex").await?;
    let m = insert_member(&db, "Ada").await?;
    project_team_member::link(&db, p1.project_id, m.team_member_id).await?;
    project_team_member::link(&db, p2.project_id, m.team_member_id).await?;

    assert_eq!(project_team_member::unlink_projects(&db, &[]).await?, 0);
    assert_eq!(project_team_member::unlink_projects(&db, &[p1.project_id, p2.project_id]).await?, 2);
    assert_eq!(project_team_member::Entity::find().all(&db).await?.len(), 0);
    // the member itself survives
    assert!(team_member::Entity::find_by_id(m.team_member_id).one(&db).await?.is_some());
    Ok(())
}

/// Validation helpers name the offending field
#[test]
fn test_validate_fields_reports_field() {
    let long = "x".repeat(crate::fields::MAX_TEXT_LEN + 1);
    let err = site::validate_fields(Some("ok"), None, None, Some(&long), None).unwrap_err();
    assert!(err.to_string().contains("siteZip"));
    assert!(project::validate_fields(None, None, None).is_ok());
    let err = team_member::validate_fields(None, None, Some(&long)).unwrap_err();
    assert!(err.to_string().contains("teamMemberPhone"));
}
