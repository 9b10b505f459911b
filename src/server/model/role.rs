//! Viewer roles and visibility scope.
//!
//! Role strings stored on `keshav_user` rows are parsed once into a closed [`Role`]
//! variant; everything downstream matches on the variant instead of comparing strings.
//! An unknown role string maps to [`Role::Unrecognized`], which resolves to a scope
//! that matches nothing.

/// Role assigned to a Keshav user, parsed from the stored role string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Full visibility across the organization, exempt from the gender gate.
    Admin,
    /// Visibility limited to explicitly assigned units.
    Coordinator,
    /// Visibility limited to the user's own region.
    RegionHead,
    /// Unknown role string; resolves to an empty scope.
    Unrecognized,
}

impl Role {
    pub fn parse(role: &str) -> Self {
        match role {
            "admin" => Self::Admin,
            "coordinator" => Self::Coordinator,
            "region_head" => Self::RegionHead,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coordinator => "coordinator",
            Self::RegionHead => "region_head",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Organizational reach of a resolved role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleScope {
    /// Every unit and region is visible.
    Global,
    /// Only the listed unit IDs are visible.
    Units(Vec<i32>),
    /// Only units belonging to this region ID are visible.
    Region(i32),
    /// Nothing is visible.
    Unrecognized,
}

/// The fully resolved visibility of one viewer: organizational scope plus the
/// optional gender gate applied to roster rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerScope {
    pub scope: RoleScope,
    /// When set, only roster rows with this gender are visible.
    pub gender_gate: Option<String>,
}

impl ViewerScope {
    /// Scope that matches nothing, used for unrecognized roles.
    pub fn empty() -> Self {
        Self {
            scope: RoleScope::Unrecognized,
            gender_gate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_role_strings() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("coordinator"), Role::Coordinator);
        assert_eq!(Role::parse("region_head"), Role::RegionHead);
    }

    #[test]
    fn unknown_role_string_is_unrecognized() {
        assert_eq!(Role::parse("superuser"), Role::Unrecognized);
        assert_eq!(Role::parse(""), Role::Unrecognized);
        // Matching is exact, no case folding
        assert_eq!(Role::parse("Admin"), Role::Unrecognized);
    }

    #[test]
    fn role_round_trips_through_as_str() {
        for role in [Role::Admin, Role::Coordinator, Role::RegionHead] {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }
}
