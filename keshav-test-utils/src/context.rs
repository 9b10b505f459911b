//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` wraps an in-memory SQLite database
//! and exposes fixture accessors for inserting org, user, and project rows.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{org::OrgFixtures, project::ProjectFixtures, user::UserFixtures},
};

/// Test context created by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_attendance_tables().build().await?;
///
/// let (region, unit) = test.org().insert_region_with_unit("North", "North A").await?;
/// let member = test.org().insert_mock_member(1, unit.id).await?;
/// let (project, event) = test.projects().insert_project_with_event("Winter Camp").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Org tree and member fixtures
    pub fn org(&self) -> OrgFixtures<'_> {
        OrgFixtures::new(&self.db)
    }

    /// Keshav user and assignment fixtures
    pub fn users(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    /// Project, event, and registration fixtures
    pub fn projects(&self) -> ProjectFixtures<'_> {
        ProjectFixtures::new(&self.db)
    }

    /// Convert the database connection into any state type constructible from it.
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main keshav crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}
