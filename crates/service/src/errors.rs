use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidRelationship(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

impl ServiceError {
    /// Lookup failure while reading or deleting.
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} with ID={} was not found", entity, id))
    }

    /// Lookup failure while resolving the target of an update.
    pub fn does_not_exist(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} with ID={} does not exist", entity, id))
    }

    pub fn project_not_in_site(project_id: i32, site_id: i32) -> Self {
        Self::InvalidRelationship(format!(
            "Project with ID={} does not belong to site with ID={}",
            project_id, site_id
        ))
    }

    /// True for failures caused by the request rather than the backend.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::InvalidRelationship(_) => true,
            Self::Model(models::errors::ModelError::Validation(_)) => true,
            Self::Model(models::errors::ModelError::Db(_)) | Self::Db(_) => false,
        }
    }
}
