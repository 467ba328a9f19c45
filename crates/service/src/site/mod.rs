//! Sites, their projects, and the team members staffed on those projects.

pub mod domain;
pub mod service;
