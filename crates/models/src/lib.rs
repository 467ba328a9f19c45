//! sea-orm entities for the site registry plus connection helpers.
//!
//! `site` 1..n `project` n..m `team_member`, the latter through the
//! explicit `project_team_member` association table.

pub mod errors;
pub mod db;
pub mod fields;
pub mod site;
pub mod project;
pub mod team_member;
pub mod project_team_member;

#[cfg(test)]
mod tests;
