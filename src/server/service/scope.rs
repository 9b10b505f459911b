//! Viewer scope resolution.
//!
//! Resolves a user's stored role string and assignment rows into a [`ViewerScope`]
//! exactly once per request; everything downstream consumes the resolved variant.
//! Unknown roles and incomplete assignments fail closed to an empty scope rather
//! than over-exposing data.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{scope::ScopeError, Error},
    model::role::{Role, RoleScope, ViewerScope},
};

pub struct ScopeResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScopeResolver<'a> {
    /// Creates a new instance of [`ScopeResolver`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the scope for a viewer by user ID.
    pub async fn resolve(&self, user_id: i32) -> Result<ViewerScope, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(user_id)
            .await?
            .ok_or(ScopeError::ViewerNotFound(user_id))?;

        self.resolve_for(&user).await
    }

    /// Resolves the scope for an already loaded user row.
    pub async fn resolve_for(&self, user: &entity::keshav_user::Model) -> Result<ViewerScope, Error> {
        let scope = match Role::parse(&user.role) {
            Role::Admin => ViewerScope {
                scope: RoleScope::Global,
                gender_gate: None,
            },
            Role::Coordinator => {
                let user_repo = UserRepository::new(self.db);
                let unit_ids = user_repo
                    .get_unit_assignments(user.id)
                    .await?
                    .into_iter()
                    .map(|assignment| assignment.unit_id)
                    .collect();

                ViewerScope {
                    scope: RoleScope::Units(unit_ids),
                    gender_gate: Some(user.gender.clone()),
                }
            }
            Role::RegionHead => match user.region_id {
                Some(region_id) => ViewerScope {
                    scope: RoleScope::Region(region_id),
                    gender_gate: Some(user.gender.clone()),
                },
                None => {
                    tracing::warn!(
                        user_id = %user.id,
                        "region head has no region assigned, resolving to empty scope"
                    );

                    ViewerScope::empty()
                }
            },
            Role::Unrecognized => {
                tracing::warn!(
                    user_id = %user.id,
                    role = %user.role,
                    "unrecognized role, resolving to empty scope"
                );

                ViewerScope::empty()
            }
        };

        Ok(scope)
    }
}
