pub use sea_orm_migration::prelude::*;

mod m20260110_000001_region;
mod m20260110_000002_org_unit;
mod m20260110_000003_member;
mod m20260110_000004_keshav_user;
mod m20260110_000005_user_unit_assignment;
mod m20260110_000006_project;
mod m20260110_000007_project_event;
mod m20260110_000008_registration;
mod m20260110_000009_attendance_record;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_region::Migration),
            Box::new(m20260110_000002_org_unit::Migration),
            Box::new(m20260110_000003_member::Migration),
            Box::new(m20260110_000004_keshav_user::Migration),
            Box::new(m20260110_000005_user_unit_assignment::Migration),
            Box::new(m20260110_000006_project::Migration),
            Box::new(m20260110_000007_project_event::Migration),
            Box::new(m20260110_000008_registration::Migration),
            Box::new(m20260110_000009_attendance_record::Migration),
        ]
    }
}
