use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the attendance roster as shown on the marking screen
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterEntryDto {
    pub member_id: i32,
    pub member_code: String,
    pub first_name: String,
    pub last_name: String,
    pub unit_id: i32,
    pub present: bool,
    pub marked_at: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToggleResultDto {
    pub member_id: i32,
    pub present: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CheckInDto {
    pub badge_code: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnitCountDto {
    pub unit_id: i32,
    pub unit_name: String,
    pub present: u64,
    pub registered: u64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendanceSummaryDto {
    pub event_id: i32,
    pub total_present: u64,
    pub total_registered: u64,
    pub units: Vec<UnitCountDto>,
}

/// A presence delta streamed to live dashboards
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PresenceDeltaDto {
    pub member_id: i32,
    pub present: bool,
    pub total_present: u64,
}
