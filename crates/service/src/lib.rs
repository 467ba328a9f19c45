//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Owns transaction boundaries and the cascade rules between entities.

pub mod errors;
pub mod site;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use site::domain::{ProjectData, SiteData, TeamMemberData};
pub use site::service::SiteService;
