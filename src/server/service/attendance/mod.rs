//! Attendance presence reconciliation.
//!
//! The ledger and session form the engine; the marking and summary services are its
//! two call sites, sharing one design: subscribe to the change feed, bulk load the
//! event's records, then fold local toggles and remote notifications into the same
//! in-memory state.

pub mod ledger;
pub mod marking;
pub mod session;
pub mod summary;
