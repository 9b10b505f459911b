//! Business logic services for the Keshav platform.
//!
//! Services coordinate repositories, the change feed, and scope resolution. The
//! attendance module holds the presence reconciliation engine shared by the marking
//! and summary screens.

pub mod attendance;
pub mod member;
pub mod registration;
pub mod roster;
pub mod scope;
