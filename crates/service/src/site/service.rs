use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{project, project_team_member, site, team_member};

use crate::errors::ServiceError;
use crate::site::domain::{ProjectData, SiteData, TeamMemberData};

/// Application service for sites, their projects, and project staffing.
///
/// Every public operation runs inside exactly one database transaction:
/// read-only for retrievals (where the backend supports access modes) and
/// read-write for mutations. An error drops the transaction, rolling it back.
#[derive(Clone)]
pub struct SiteService {
    db: DatabaseConnection,
}

#[derive(Clone, Copy)]
enum Lookup {
    /// Resolving the target of a save.
    Update,
    /// Reading or deleting.
    Retrieve,
}

impl Lookup {
    fn missing(self, entity: &str, id: i32) -> ServiceError {
        match self {
            Lookup::Update => ServiceError::does_not_exist(entity, id),
            Lookup::Retrieve => ServiceError::not_found(entity, id),
        }
    }
}

impl SiteService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub fn db(&self) -> &DatabaseConnection { &self.db }

    async fn begin_read(&self) -> Result<DatabaseTransaction, ServiceError> {
        let txn = match self.db.get_database_backend() {
            DbBackend::Postgres => self.db.begin_with_config(None, Some(AccessMode::ReadOnly)).await?,
            // SQLite has no per-transaction access mode
            _ => self.db.begin().await?,
        };
        Ok(txn)
    }

    // ------------------------------------------------------------------ site

    /// Create a site when `site_id` is absent, otherwise overwrite the scalar fields of the existing one.
    #[instrument(skip(self, data), fields(site_id = ?data.site_id))]
    pub async fn save_site(&self, data: SiteData) -> Result<SiteData, ServiceError> {
        data.validate()?;
        let txn = self.db.begin().await?;
        let saved = match data.site_id {
            None => {
                let am = site::ActiveModel { ..Default::default() };
                let created = copy_site_fields(am, &data).insert(&txn).await?;
                info!(site_id = created.site_id, "site_created");
                created
            }
            Some(id) => {
                let existing: site::ActiveModel = find_site(&txn, id, Lookup::Update).await?.into();
                copy_site_fields(existing, &data).update(&txn).await?
            }
        };
        let out = site_data(&txn, saved).await?;
        txn.commit().await?;
        Ok(out)
    }

    pub async fn retrieve_all_sites(&self) -> Result<Vec<SiteData>, ServiceError> {
        let txn = self.begin_read().await?;
        let mut out = Vec::new();
        for s in site::list(&txn).await? {
            out.push(site_data(&txn, s).await?);
        }
        txn.commit().await?;
        Ok(out)
    }

    pub async fn retrieve_site_by_id(&self, site_id: i32) -> Result<SiteData, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_site(&txn, site_id, Lookup::Retrieve).await?;
        let out = site_data(&txn, found).await?;
        txn.commit().await?;
        Ok(out)
    }

    /// Delete a site together with its projects and their staffing rows.
    #[instrument(skip(self))]
    pub async fn delete_site_by_id(&self, site_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let found = find_site(&txn, site_id, Lookup::Retrieve).await?;
        let project_ids: Vec<i32> = project::list_by_site(&txn, site_id)
            .await?
            .into_iter()
            .map(|p| p.project_id)
            .collect();
        let unlinked = project_team_member::unlink_projects(&txn, &project_ids).await?;
        project::Entity::delete_many()
            .filter(project::Column::SiteId.eq(site_id))
            .exec(&txn)
            .await?;
        site::Entity::delete_by_id(found.site_id).exec(&txn).await?;
        txn.commit().await?;
        info!(site_id, projects = project_ids.len(), memberships = unlinked, "site_deleted");
        Ok(())
    }

    // --------------------------------------------------------------- project

    /// Create or update a project under `site_id`.
    ///
    /// An existing project must already belong to `site_id`; it is never
    /// moved to another site.
    #[instrument(skip(self, data), fields(project_id = ?data.project_id))]
    pub async fn save_project(&self, site_id: i32, data: ProjectData) -> Result<ProjectData, ServiceError> {
        data.validate()?;
        let txn = self.db.begin().await?;
        let owner = find_site(&txn, site_id, Lookup::Update).await?;
        let saved = match data.project_id {
            None => {
                let am = project::ActiveModel { site_id: Set(owner.site_id), ..Default::default() };
                let created = copy_project_fields(am, &data).insert(&txn).await?;
                info!(site_id, project_id = created.project_id, "project_created");
                created
            }
            Some(id) => {
                let existing = find_project(&txn, id, Lookup::Update).await?;
                if existing.site_id != owner.site_id {
                    return Err(ServiceError::project_not_in_site(id, site_id));
                }
                let am: project::ActiveModel = existing.into();
                copy_project_fields(am, &data).update(&txn).await?
            }
        };
        let out = project_data(&txn, saved).await?;
        txn.commit().await?;
        Ok(out)
    }

    pub async fn retrieve_all_projects(&self) -> Result<Vec<ProjectData>, ServiceError> {
        let txn = self.begin_read().await?;
        let mut out = Vec::new();
        for p in project::list(&txn).await? {
            out.push(project_data(&txn, p).await?);
        }
        txn.commit().await?;
        Ok(out)
    }

    pub async fn retrieve_project_by_id(&self, project_id: i32) -> Result<ProjectData, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_project(&txn, project_id, Lookup::Retrieve).await?;
        let out = project_data(&txn, found).await?;
        txn.commit().await?;
        Ok(out)
    }

    #[instrument(skip(self))]
    pub async fn delete_project_by_id(&self, project_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let found = find_project(&txn, project_id, Lookup::Retrieve).await?;
        let unlinked = project_team_member::unlink_projects(&txn, &[found.project_id]).await?;
        project::Entity::delete_by_id(found.project_id).exec(&txn).await?;
        txn.commit().await?;
        info!(project_id, memberships = unlinked, "project_deleted");
        Ok(())
    }

    // ----------------------------------------------------------- team member

    /// Create or update a team member and make sure it is staffed on `project_id`.
    ///
    /// Other project memberships of an existing member are left untouched.
    #[instrument(skip(self, data), fields(team_member_id = ?data.team_member_id))]
    pub async fn save_team_member(&self, project_id: i32, data: TeamMemberData) -> Result<TeamMemberData, ServiceError> {
        data.validate()?;
        let txn = self.db.begin().await?;
        let staffed_on = find_project(&txn, project_id, Lookup::Retrieve).await?;
        let saved = match data.team_member_id {
            None => {
                let am = team_member::ActiveModel { ..Default::default() };
                let created = copy_team_member_fields(am, &data).insert(&txn).await?;
                info!(project_id, team_member_id = created.team_member_id, "team_member_created");
                created
            }
            Some(id) => {
                let existing: team_member::ActiveModel = find_team_member(&txn, id, Lookup::Update).await?.into();
                copy_team_member_fields(existing, &data).update(&txn).await?
            }
        };
        project_team_member::link(&txn, staffed_on.project_id, saved.team_member_id).await?;
        txn.commit().await?;
        Ok(TeamMemberData::from(saved))
    }

    pub async fn retrieve_all_team_members(&self) -> Result<Vec<TeamMemberData>, ServiceError> {
        let txn = self.begin_read().await?;
        let members = team_member::list(&txn).await?;
        txn.commit().await?;
        Ok(members.into_iter().map(TeamMemberData::from).collect())
    }

    pub async fn retrieve_team_member_by_id(&self, team_member_id: i32) -> Result<TeamMemberData, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_team_member(&txn, team_member_id, Lookup::Retrieve).await?;
        txn.commit().await?;
        Ok(TeamMemberData::from(found))
    }

    /// Strip the member from every project's member set, then delete it.
    #[instrument(skip(self))]
    pub async fn delete_team_member_by_id(&self, team_member_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let found = find_team_member(&txn, team_member_id, Lookup::Retrieve).await?;
        let unlinked = project_team_member::unlink_team_member(&txn, found.team_member_id).await?;
        team_member::Entity::delete_by_id(found.team_member_id).exec(&txn).await?;
        txn.commit().await?;
        info!(team_member_id, memberships = unlinked, "team_member_deleted");
        Ok(())
    }
}

async fn find_site<C: ConnectionTrait>(conn: &C, id: i32, lookup: Lookup) -> Result<site::Model, ServiceError> {
    site::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| lookup.missing("Site", id))
}

async fn find_project<C: ConnectionTrait>(conn: &C, id: i32, lookup: Lookup) -> Result<project::Model, ServiceError> {
    project::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| lookup.missing("Project", id))
}

async fn find_team_member<C: ConnectionTrait>(conn: &C, id: i32, lookup: Lookup) -> Result<team_member::Model, ServiceError> {
    team_member::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| lookup.missing("Team member", id))
}

fn copy_site_fields(mut am: site::ActiveModel, data: &SiteData) -> site::ActiveModel {
    am.site_name = Set(data.site_name.clone());
    am.site_address = Set(data.site_address.clone());
    am.site_state = Set(data.site_state.clone());
    am.site_zip = Set(data.site_zip.clone());
    am.site_phone = Set(data.site_phone.clone());
    am
}

fn copy_project_fields(mut am: project::ActiveModel, data: &ProjectData) -> project::ActiveModel {
    am.project_name = Set(data.project_name.clone());
    am.project_length = Set(data.project_length.clone());
    am.project_type = Set(data.project_type.clone());
    am
}

fn copy_team_member_fields(mut am: team_member::ActiveModel, data: &TeamMemberData) -> team_member::ActiveModel {
    am.team_member_role = Set(data.team_member_role.clone());
    am.team_member_name = Set(data.team_member_name.clone());
    am.team_member_phone = Set(data.team_member_phone.clone());
    am
}

async fn project_data<C: ConnectionTrait>(conn: &C, p: project::Model) -> Result<ProjectData, ServiceError> {
    let members = team_member::list_by_project(conn, &p).await?;
    Ok(ProjectData::from_parts(p, members))
}

async fn site_data<C: ConnectionTrait>(conn: &C, s: site::Model) -> Result<SiteData, ServiceError> {
    let mut projects = Vec::new();
    for p in project::list_by_site(conn, s.site_id).await? {
        projects.push(project_data(conn, p).await?);
    }
    Ok(SiteData::from_parts(s, projects))
}
