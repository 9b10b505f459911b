//! Membership and attendance data repositories.
//!
//! This module contains repositories for the Keshav record store. Each repository
//! handles a specific entity type (org tree, members, users, projects and events,
//! registrations, attendance records) and provides point and range queries plus the
//! insert/delete mutations consumed by the service layer.

pub mod attendance;
pub mod member;
pub mod org;
pub mod project;
pub mod registration;
pub mod user;
