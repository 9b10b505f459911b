pub use super::attendance_record::Entity as AttendanceRecord;
pub use super::keshav_user::Entity as KeshavUser;
pub use super::member::Entity as Member;
pub use super::org_unit::Entity as OrgUnit;
pub use super::project::Entity as Project;
pub use super::project_event::Entity as ProjectEvent;
pub use super::region::Entity as Region;
pub use super::registration::Entity as Registration;
pub use super::user_unit_assignment::Entity as UserUnitAssignment;
