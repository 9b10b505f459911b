use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        member_code: &str,
        first_name: &str,
        last_name: &str,
        gender: &str,
        unit_id: i32,
    ) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            member_code: ActiveValue::Set(member_code.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            unit_id: ActiveValue::Set(unit_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn get(&self, member_id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await
    }

    /// Returns every member together with their unit.
    ///
    /// The unit side is `None` only if the member references a unit that no longer
    /// exists; callers treat such rows as outside every scope.
    pub async fn list_with_units(
        &self,
    ) -> Result<Vec<(entity::member::Model, Option<entity::org_unit::Model>)>, DbErr> {
        entity::prelude::Member::find()
            .find_also_related(entity::prelude::OrgUnit)
            .all(self.db)
            .await
    }

    pub async fn list_by_ids(
        &self,
        member_ids: Vec<i32>,
    ) -> Result<Vec<(entity::member::Model, Option<entity::org_unit::Model>)>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(member_ids))
            .find_also_related(entity::prelude::OrgUnit)
            .all(self.db)
            .await
    }
}
