//! Member directory service.

use sea_orm::DatabaseConnection;

use crate::{
    model::member::{CreateMemberDto, MemberDto},
    server::{
        data::{member::MemberRepository, org::OrgUnitRepository},
        error::Error,
        service::{
            roster::{visible_roster, RosterRow},
            scope::ScopeResolver,
        },
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member.
    ///
    /// An unknown unit ID surfaces as a database error (foreign-key constraint).
    pub async fn create_member(&self, dto: CreateMemberDto) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);
        let unit_repo = OrgUnitRepository::new(self.db);

        let member = member_repo
            .create(
                &dto.member_code,
                &dto.first_name,
                &dto.last_name,
                &dto.gender,
                dto.unit_id,
            )
            .await?;

        let unit = unit_repo.get(member.unit_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Unit ID {} missing after member insert",
                member.unit_id
            ))
        })?;

        Ok(MemberDto {
            id: member.id,
            member_code: member.member_code,
            first_name: member.first_name,
            last_name: member.last_name,
            gender: member.gender,
            unit_id: unit.id,
            region_id: unit.region_id,
        })
    }

    /// The member directory as visible to the given viewer, ordered by name.
    pub async fn directory(&self, viewer_user_id: i32) -> Result<Vec<MemberDto>, Error> {
        let scope_resolver = ScopeResolver::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let viewer = scope_resolver.resolve(viewer_user_id).await?;

        let rows: Vec<RosterRow> = member_repo
            .list_with_units()
            .await?
            .into_iter()
            .filter_map(|(member, unit)| RosterRow::from_member(member, unit))
            .collect();

        let directory = visible_roster(&viewer, rows)
            .into_iter()
            .map(|row| MemberDto {
                id: row.member_id,
                member_code: row.member_code,
                first_name: row.first_name,
                last_name: row.last_name,
                gender: row.gender,
                unit_id: row.unit_id,
                region_id: row.region_id,
            })
            .collect();

        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use keshav_test_utils::prelude::*;

    use crate::{
        model::member::CreateMemberDto,
        server::{data::user::UserRepository, service::member::MemberService},
    };

    /// Expect an admin to see the full directory ordered by name
    #[tokio::test]
    async fn directory_for_admin_is_complete_and_ordered() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        test.org()
            .insert_member(unit.id, "K-001", "Meera", "Iyer", "female")
            .await?;
        test.org()
            .insert_member(unit.id, "K-002", "arjun", "Sharma", "male")
            .await?;
        test.org()
            .insert_member(unit.id, "K-003", "Arjun", "Bhat", "male")
            .await?;
        let admin = test.users().insert_user("admin", "male", None).await?;

        let service = MemberService::new(&test.db);
        let directory = service.directory(admin.id).await?;

        assert_eq!(directory.len(), 3);
        let codes: Vec<&str> = directory.iter().map(|m| m.member_code.as_str()).collect();
        assert_eq!(codes, vec!["K-003", "K-002", "K-001"]);

        Ok(())
    }

    /// Expect a region head to see only same-region, same-gender members
    #[tokio::test]
    async fn directory_for_region_head_is_gated() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let (north, north_unit) = test.org().insert_region_with_unit("North", "North A").await?;
        let (_, south_unit) = test.org().insert_region_with_unit("South", "South A").await?;

        let visible = test
            .org()
            .insert_member(north_unit.id, "K-001", "Asha", "Patel", "female")
            .await?;
        test.org()
            .insert_member(north_unit.id, "K-002", "Arjun", "Sharma", "male")
            .await?;
        test.org()
            .insert_member(south_unit.id, "K-003", "Kavita", "Rao", "female")
            .await?;

        let head = test
            .users()
            .insert_user("region_head", "female", Some(north.id))
            .await?;

        let service = MemberService::new(&test.db);
        let directory = service.directory(head.id).await?;

        assert_eq!(directory.len(), 1);
        assert_eq!(directory[0].id, visible.id);
        assert_eq!(directory[0].region_id, north.id);

        Ok(())
    }

    /// Expect an unrecognized role to see an empty directory
    #[tokio::test]
    async fn directory_for_unknown_role_is_empty() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        test.org().insert_mock_member(1, unit.id).await?;
        let user = test.users().insert_user("superuser", "male", None).await?;

        let service = MemberService::new(&test.db);
        let directory = service.directory(user.id).await?;

        assert!(directory.is_empty());

        Ok(())
    }

    /// Expect member creation to persist the row
    #[tokio::test]
    async fn create_member_persists() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        let coordinator = test.users().insert_user("coordinator", "male", None).await?;
        let user_repo = UserRepository::new(&test.db);
        user_repo.assign_unit(coordinator.id, unit.id).await?;

        let service = MemberService::new(&test.db);
        let member = service
            .create_member(CreateMemberDto {
                member_code: "K-100".to_string(),
                first_name: "Rohan".to_string(),
                last_name: "Desai".to_string(),
                gender: "male".to_string(),
                unit_id: unit.id,
            })
            .await?;

        assert_eq!(member.member_code, "K-100");
        assert_eq!(member.unit_id, unit.id);
        assert_eq!(member.region_id, unit.region_id);

        let directory = service.directory(coordinator.id).await?;
        assert_eq!(directory.len(), 1);
        assert_eq!(directory[0].id, member.id);

        Ok(())
    }
}
