//! Role-based navigation guard.
//!
//! A pure function of (session view, target path) evaluated once per
//! navigation attempt. Session-level checks (authentication, forced password
//! reset, already-logged-in) take precedence over role checks.

use gridlog_auth::SessionView;
use gridlog_core::Role;

use crate::routes::resolve;

pub const LOGIN: &str = "/login";
pub const FIRST_LOGIN: &str = "/first-login";
pub const DASHBOARD: &str = "/dashboard";

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether navigation to `target` may proceed.
///
/// Check order (earlier rules win):
/// 1. auth required, no session      -> `/login`
/// 2. forced password reset pending  -> `/first-login` (unless already there)
/// 3. `/first-login` without need    -> `/dashboard`
/// 4. `/login` while authenticated   -> `/dashboard`
/// 5. allowed-roles mismatch         -> `/dashboard` (or `/login` when the
///    dashboard itself is the forbidden target, to avoid a redirect loop)
/// 6. admin-only / employee-only mismatch -> same fallback as 5
/// 7. otherwise allow
#[must_use]
pub fn check(view: &SessionView, target: &str) -> GuardDecision {
    let target = normalize(target);
    let route = resolve(target);
    // Unknown paths fall through to the not-found page, which sits behind
    // authentication like everything else.
    let requires_auth = route.is_none_or(|r| r.meta.requires_auth);

    if requires_auth && !view.authenticated {
        return GuardDecision::Redirect(LOGIN);
    }
    if requires_auth && view.password_reset_required && target != FIRST_LOGIN {
        return GuardDecision::Redirect(FIRST_LOGIN);
    }
    if target == FIRST_LOGIN && !view.password_reset_required && view.authenticated {
        return GuardDecision::Redirect(DASHBOARD);
    }
    if target == LOGIN && view.authenticated {
        return GuardDecision::Redirect(DASHBOARD);
    }

    let Some(route) = route else {
        return GuardDecision::Allow;
    };
    let meta = &route.meta;

    if !meta.roles.is_empty() {
        let allowed = view.role.is_some_and(|role| meta.roles.contains(&role));
        if !allowed {
            return deny(target);
        }
    }
    if meta.admin_only && view.role != Some(Role::Admin) {
        return deny(target);
    }
    if meta.employee_only && view.role != Some(Role::Employee) {
        return deny(target);
    }

    GuardDecision::Allow
}

/// Role denial sends the user to the dashboard; when the dashboard itself is
/// the forbidden target, fall back to login instead of looping.
fn deny(target: &str) -> GuardDecision {
    if target == DASHBOARD {
        GuardDecision::Redirect(LOGIN)
    } else {
        GuardDecision::Redirect(DASHBOARD)
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::GuardDecision::{Allow, Redirect};
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn anonymous() -> SessionView {
        SessionView::anonymous()
    }

    fn authed(role: Role, reset: bool) -> SessionView {
        SessionView {
            authenticated: true,
            role: Some(role),
            password_reset_required: reset,
        }
    }

    fn authed_no_profile() -> SessionView {
        SessionView {
            authenticated: true,
            role: None,
            password_reset_required: false,
        }
    }

    #[rstest]
    // 1. unauthenticated access
    #[case(anonymous(), "/reports", Redirect(LOGIN))]
    #[case(anonymous(), "/dashboard", Redirect(LOGIN))]
    #[case(anonymous(), "/unknown/path", Redirect(LOGIN))]
    #[case(anonymous(), "/login", Allow)]
    // 2. forced password reset takes precedence over everything role-based
    #[case(authed(Role::Employee, true), "/reports", Redirect(FIRST_LOGIN))]
    #[case(authed(Role::Employee, true), "/periods", Redirect(FIRST_LOGIN))]
    #[case(authed(Role::Employee, true), "/first-login", Allow)]
    // 3. first-login without a pending reset
    #[case(authed(Role::Employee, false), "/first-login", Redirect(DASHBOARD))]
    // 4. login while authenticated
    #[case(authed(Role::Admin, false), "/login", Redirect(DASHBOARD))]
    // 5. allowed-roles membership
    #[case(authed(Role::Employee, false), "/periods", Redirect(DASHBOARD))]
    #[case(authed(Role::Admin, false), "/periods", Allow)]
    #[case(authed(Role::Employee, false), "/team-oversight", Redirect(DASHBOARD))]
    #[case(authed(Role::Supervisor, false), "/team-oversight", Allow)]
    #[case(authed_no_profile(), "/dashboard", Redirect(LOGIN))]
    // 6. employee-only routes
    #[case(authed(Role::Supervisor, false), "/reports/new", Redirect(DASHBOARD))]
    #[case(authed(Role::Admin, false), "/reports/7/edit", Redirect(DASHBOARD))]
    #[case(authed(Role::Employee, false), "/reports/new", Allow)]
    #[case(authed(Role::Employee, false), "/reports/7/edit", Allow)]
    // 7. plain allowed navigation
    #[case(authed(Role::Employee, false), "/dashboard", Allow)]
    #[case(authed(Role::Supervisor, false), "/reports/42", Allow)]
    #[case(authed(Role::Admin, false), "/reports", Allow)]
    fn guard_matrix(
        #[case] view: SessionView,
        #[case] target: &str,
        #[case] expected: GuardDecision,
    ) {
        assert_eq!(check(&view, target), expected);
    }

    #[test]
    fn trailing_slash_does_not_change_decision() {
        let view = authed(Role::Employee, false);
        assert_eq!(check(&view, "/dashboard/"), check(&view, "/dashboard"));
        assert_eq!(check(&view, "/login/"), check(&view, "/login"));
    }

    #[test]
    fn reset_precedence_over_login_redirect() {
        // Authenticated + reset pending, heading to /login: rule 2 fires
        // before rule 4, so the user lands on the reset page.
        let view = authed(Role::Employee, true);
        assert_eq!(check(&view, "/reports"), Redirect(FIRST_LOGIN));
    }
}
