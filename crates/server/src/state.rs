use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::SiteService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub sites: Arc<SiteService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { sites: Arc::new(SiteService::new(db)) }
    }
}
