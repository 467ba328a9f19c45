use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{errors, fields::validate_text, project};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub site_id: i32,
    pub site_name: Option<String>,
    pub site_address: Option<String>,
    pub site_state: Option<String>,
    pub site_zip: Option<String>,
    pub site_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Project }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Project => Entity::has_many(project::Entity).into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(
    name: Option<&str>,
    address: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
    phone: Option<&str>,
) -> Result<(), errors::ModelError> {
    validate_text("siteName", name)?;
    validate_text("siteAddress", address)?;
    validate_text("siteState", state)?;
    validate_text("siteZip", zip)?;
    validate_text("sitePhone", phone)?;
    Ok(())
}

/// All sites ordered by id.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::SiteId).all(conn).await?)
}
