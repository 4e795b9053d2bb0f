//! Static route table.
//!
//! Paths use `:param` placeholders for dynamic segments. Literal routes must
//! come before their parameterized siblings so `/reports/new` is not captured
//! by `/reports/:id`.

use gridlog_core::Role;

/// Navigation constraints attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Roles allowed to visit; empty means any authenticated user.
    pub roles: &'static [Role],
    pub admin_only: bool,
    pub employee_only: bool,
}

impl RouteMeta {
    const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            roles: &[],
            admin_only: false,
            employee_only: false,
        }
    }

    const fn public() -> Self {
        Self {
            requires_auth: false,
            ..Self::authenticated()
        }
    }

    const fn for_roles(roles: &'static [Role]) -> Self {
        Self {
            roles,
            ..Self::authenticated()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub meta: RouteMeta,
}

const ANY_ROLE: &[Role] = &[Role::Employee, Role::Supervisor, Role::Admin];

const ROUTES: &[Route] = &[
    Route {
        path: "/login",
        meta: RouteMeta::public(),
    },
    Route {
        path: "/first-login",
        meta: RouteMeta::authenticated(),
    },
    Route {
        path: "/",
        meta: RouteMeta::authenticated(),
    },
    Route {
        path: "/dashboard",
        meta: RouteMeta::for_roles(ANY_ROLE),
    },
    Route {
        path: "/reports",
        meta: RouteMeta::for_roles(ANY_ROLE),
    },
    Route {
        path: "/reports/new",
        meta: RouteMeta {
            employee_only: true,
            ..RouteMeta::for_roles(&[Role::Employee])
        },
    },
    Route {
        path: "/reports/:id",
        meta: RouteMeta::for_roles(ANY_ROLE),
    },
    Route {
        path: "/reports/:id/edit",
        meta: RouteMeta {
            employee_only: true,
            ..RouteMeta::for_roles(&[Role::Employee])
        },
    },
    Route {
        path: "/periods",
        meta: RouteMeta {
            admin_only: true,
            ..RouteMeta::for_roles(&[Role::Admin])
        },
    },
    Route {
        path: "/team-oversight",
        meta: RouteMeta::for_roles(&[Role::Supervisor]),
    },
];

/// The full route table, in match order.
#[must_use]
pub const fn routes() -> &'static [Route] {
    ROUTES
}

/// Find the route a concrete path belongs to. Trailing slashes are ignored;
/// `:param` segments match any non-empty segment.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static Route> {
    let target: Vec<&str> = segments(path);
    ROUTES
        .iter()
        .find(|route| matches_pattern(&segments(route.path), &target))
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn matches_pattern(pattern: &[&str], target: &[&str]) -> bool {
    pattern.len() == target.len()
        && pattern
            .iter()
            .zip(target)
            .all(|(p, t)| p.starts_with(':') || p == t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_routes_resolve() {
        assert_eq!(resolve("/login").unwrap().path, "/login");
        assert_eq!(resolve("/dashboard").unwrap().path, "/dashboard");
        assert_eq!(resolve("/dashboard/").unwrap().path, "/dashboard");
    }

    #[test]
    fn param_segments_match_ids() {
        assert_eq!(resolve("/reports/42").unwrap().path, "/reports/:id");
        assert_eq!(resolve("/reports/42/edit").unwrap().path, "/reports/:id/edit");
    }

    #[test]
    fn literal_wins_over_param_sibling() {
        assert_eq!(resolve("/reports/new").unwrap().path, "/reports/new");
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve("/nope").is_none());
        assert!(resolve("/reports/42/edit/extra").is_none());
    }

    #[test]
    fn root_resolves() {
        assert_eq!(resolve("/").unwrap().path, "/");
    }
}
