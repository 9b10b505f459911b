pub mod prelude;

pub mod attendance_record;
pub mod keshav_user;
pub mod member;
pub mod org_unit;
pub mod project;
pub mod project_event;
pub mod region;
pub mod registration;
pub mod user_unit_assignment;
