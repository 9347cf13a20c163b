//! Core library for `projects` — organizes coding projects into named
//! workspaces.
//!
//! Provides the persisted workspace database, user settings, and the
//! filesystem operations used to list, create, and delete projects.

pub mod config;
pub mod error;
pub mod project;
pub mod workspace;
