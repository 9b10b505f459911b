//! Declarative test builder.
//!
//! Configures which tables exist before the test runs; all statements execute
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test environments over an in-memory SQLite database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_org_tables: bool,
    include_attendance_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_org_tables: false,
            include_attendance_tables: false,
        }
    }

    /// Add the org tree, member, and user tables.
    pub fn with_org_tables(mut self) -> Self {
        self.include_org_tables = true;
        self
    }

    /// Add every table: org tree, members, users, projects, events,
    /// registrations, and attendance records.
    pub fn with_attendance_tables(mut self) -> Self {
        self.include_org_tables = true;
        self.include_attendance_tables = true;
        self
    }

    /// Add a custom entity table.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Create the database and execute all queued table statements.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let mut stmts = Vec::new();

        if self.include_org_tables {
            stmts.push(schema.create_table_from_entity(entity::prelude::Region));
            stmts.push(schema.create_table_from_entity(entity::prelude::OrgUnit));
            stmts.push(schema.create_table_from_entity(entity::prelude::Member));
            stmts.push(schema.create_table_from_entity(entity::prelude::KeshavUser));
            stmts.push(schema.create_table_from_entity(entity::prelude::UserUnitAssignment));
        }

        if self.include_attendance_tables {
            stmts.push(schema.create_table_from_entity(entity::prelude::Project));
            stmts.push(schema.create_table_from_entity(entity::prelude::ProjectEvent));
            stmts.push(schema.create_table_from_entity(entity::prelude::Registration));
            stmts.push(schema.create_table_from_entity(entity::prelude::AttendanceRecord));
        }

        stmts.extend(self.tables);

        context.with_tables(stmts).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
