//! Roster visibility filtering.
//!
//! Pure functions, no I/O: given a resolved [`ViewerScope`] and a full roster,
//! produce the rows the viewer may see, ordered case-insensitively by first name
//! with last name as the tie breaker.

use crate::server::model::role::{RoleScope, ViewerScope};

/// One roster row with the organizational placement needed for scope checks.
///
/// The region is carried denormalized (derived from the row's unit) so region
/// scoping needs no further lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub member_id: i32,
    pub member_code: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub unit_id: i32,
    pub region_id: i32,
}

impl RosterRow {
    /// Builds a row from a member and their unit.
    ///
    /// Returns `None` when the unit is missing (dangling placement); such rows are
    /// outside every scope.
    pub fn from_member(
        member: entity::member::Model,
        unit: Option<entity::org_unit::Model>,
    ) -> Option<Self> {
        let unit = unit?;

        Some(Self {
            member_id: member.id,
            member_code: member.member_code,
            first_name: member.first_name,
            last_name: member.last_name,
            gender: member.gender,
            unit_id: unit.id,
            region_id: unit.region_id,
        })
    }
}

/// Filters a roster down to the rows visible to the viewer and sorts the result.
pub fn visible_roster(scope: &ViewerScope, mut roster: Vec<RosterRow>) -> Vec<RosterRow> {
    roster.retain(|row| row_in_scope(scope, row));
    sort_roster(&mut roster);
    roster
}

fn row_in_scope(scope: &ViewerScope, row: &RosterRow) -> bool {
    let placement_visible = match &scope.scope {
        RoleScope::Global => true,
        RoleScope::Units(unit_ids) => unit_ids.contains(&row.unit_id),
        RoleScope::Region(region_id) => row.region_id == *region_id,
        RoleScope::Unrecognized => false,
    };

    let gender_visible = match &scope.gender_gate {
        Some(gender) => row.gender == *gender,
        None => true,
    };

    placement_visible && gender_visible
}

/// Case-insensitive lexicographic order by first name, then last name.
pub fn sort_roster(roster: &mut [RosterRow]) {
    roster.sort_by(|a, b| {
        a.first_name
            .to_lowercase()
            .cmp(&b.first_name.to_lowercase())
            .then_with(|| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()))
    });
}
