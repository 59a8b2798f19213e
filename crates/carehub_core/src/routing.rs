//! Fragment (`#/path`) routing for dashboard sub-pages.
//!
//! # Invariants
//! - Unknown, missing or empty fragments resolve to the overview page.
//! - A role only reaches routes listed for it; anything else falls back to
//!   overview.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FRAGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?/?([A-Za-z-]*)").expect("valid fragment regex"));

/// Dashboard sub-page selected by the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Overview,
    Departments,
    Doctors,
    Nurses,
    Patients,
    Staff,
    Activity,
    Settings,
}

impl Route {
    pub const ALL: &'static [Route] = &[
        Route::Overview,
        Route::Departments,
        Route::Doctors,
        Route::Nurses,
        Route::Patients,
        Route::Staff,
        Route::Activity,
        Route::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Departments => "departments",
            Self::Doctors => "doctors",
            Self::Nurses => "nurses",
            Self::Patients => "patients",
            Self::Staff => "staff",
            Self::Activity => "activity",
            Self::Settings => "settings",
        }
    }

    /// Resolves a fragment such as `#/doctors/DOC-001?tab=2`.
    ///
    /// Only the first path segment is significant and matching is
    /// case-insensitive.
    pub fn from_fragment(fragment: &str) -> Self {
        FRAGMENT_RE
            .captures(fragment.trim())
            .and_then(|caps| caps.get(1))
            .map(|segment| segment.as_str().to_ascii_lowercase())
            .and_then(|segment| Self::parse(&segment))
            .unwrap_or_default()
    }

    /// Renders the canonical fragment, e.g. `#/patients`.
    pub fn fragment(self) -> String {
        format!("#/{}", self.as_str())
    }

    fn parse(segment: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|route| route.as_str() == segment)
    }
}

/// Dashboard audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Hospital,
}

impl Role {
    /// Routes reachable by this role.
    pub fn routes(self) -> &'static [Route] {
        match self {
            Self::Patient => &[Route::Overview, Route::Doctors, Route::Settings],
            Self::Doctor => &[
                Route::Overview,
                Route::Patients,
                Route::Activity,
                Route::Settings,
            ],
            Self::Hospital => Route::ALL,
        }
    }

    pub fn can_access(self, route: Route) -> bool {
        self.routes().contains(&route)
    }

    /// Resolves a fragment for this role, falling back to overview when the
    /// route is outside the role's reach.
    pub fn resolve(self, fragment: &str) -> Route {
        let route = Route::from_fragment(fragment);
        if self.can_access(route) {
            route
        } else {
            Route::Overview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, Route};

    #[test]
    fn fragment_resolution_uses_first_segment() {
        assert_eq!(Route::from_fragment("#/doctors"), Route::Doctors);
        assert_eq!(Route::from_fragment("#/Patients/PAT-001?x=1"), Route::Patients);
        assert_eq!(Route::from_fragment("/staff"), Route::Staff);
    }

    #[test]
    fn unknown_or_missing_fragment_falls_back_to_overview() {
        assert_eq!(Route::from_fragment(""), Route::Overview);
        assert_eq!(Route::from_fragment("#/"), Route::Overview);
        assert_eq!(Route::from_fragment("#/billing"), Route::Overview);
        assert_eq!(Route::from_fragment("%%%"), Route::Overview);
    }

    #[test]
    fn fragment_roundtrips_for_every_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(&route.fragment()), *route);
        }
    }

    #[test]
    fn role_restricts_reachable_routes() {
        assert_eq!(Role::Patient.resolve("#/staff"), Route::Overview);
        assert_eq!(Role::Doctor.resolve("#/activity"), Route::Activity);
        assert_eq!(Role::Hospital.resolve("#/staff"), Route::Staff);
    }
}
