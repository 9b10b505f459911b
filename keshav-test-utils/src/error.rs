use thiserror::Error;

/// Errors surfaced while building or using a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database error (connection, schema creation, fixture insertion).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Error surfaced by the Keshav application under test.
    ///
    /// Carried as a rendered string so this crate does not have to name a
    /// specific `keshav` compilation instance (the dev-dependency cycle makes
    /// the crate-under-test a distinct instance during `cargo test --lib`).
    #[error("{0}")]
    Keshav(String),
}

impl From<keshav::server::error::Error> for TestError {
    fn from(err: keshav::server::error::Error) -> Self {
        TestError::Keshav(err.to_string())
    }
}
