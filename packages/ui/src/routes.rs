//! # Route table and navigation guard
//!
//! Every page of the app is described once in [`ROUTES`]: its path, title and
//! layout. The router's `Routable` enum lives in the platform crate and maps its
//! variants onto [`RouteName`] so the guard and the page chrome read from this
//! single table.
//!
//! [`guard`] sends unauthenticated visitors of the pages in [`AUTH_REQUIRED`] to
//! the login page and lets everything else through.

use std::fmt;

/// Stable route names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Start,
    Login,
    Register,
    MyPage,
    Admin,
    Transaction,
    Popup,
    Statistics,
    Exports,
    Budget,
}

/// Page chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Navigation bar plus content.
    Default,
    /// Bare page, used by the sign-in flow.
    None,
}

/// Static description of one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: RouteName,
    pub path: &'static str,
    pub title: Option<&'static str>,
    pub layout: Layout,
    pub background_color: Option<&'static str>,
    pub center_content: bool,
}

const START_BACKGROUND: &str = "#b7ccb4";

const fn page(name: RouteName, path: &'static str, title: &'static str) -> RouteMeta {
    RouteMeta {
        name,
        path,
        title: Some(title),
        layout: Layout::Default,
        background_color: None,
        center_content: false,
    }
}

const fn bare(name: RouteName, path: &'static str, title: &'static str, centered: bool) -> RouteMeta {
    RouteMeta {
        name,
        path,
        title: Some(title),
        layout: Layout::None,
        background_color: if centered { Some(START_BACKGROUND) } else { None },
        center_content: centered,
    }
}

/// Indexed by `RouteName as usize`.
pub static ROUTES: [RouteMeta; 11] = [
    page(RouteName::Home, "/home", "HOME"),
    bare(RouteName::Start, "/", "시작", true),
    bare(RouteName::Login, "/login", "로그인", true),
    bare(RouteName::Register, "/register", "회원가입", false),
    page(RouteName::MyPage, "/mypage", "마이페이지"),
    page(RouteName::Admin, "/admin", "관리자페이지"),
    page(RouteName::Transaction, "/transaction", "수입/지출 내역"),
    RouteMeta {
        name: RouteName::Popup,
        path: "/popup",
        title: None,
        layout: Layout::Default,
        background_color: None,
        center_content: false,
    },
    page(RouteName::Statistics, "/statistics/summary", "통계 - 요약 통계"),
    page(RouteName::Exports, "/statistics/export", "통계 - 엑셀 내보내기"),
    page(RouteName::Budget, "/budget", "예산"),
];

/// Routes that need a signed-in user.
pub const AUTH_REQUIRED: [RouteName; 7] = [
    RouteName::MyPage,
    RouteName::Admin,
    RouteName::Home,
    RouteName::Transaction,
    RouteName::Statistics,
    RouteName::Exports,
    RouteName::Budget,
];

impl RouteName {
    pub fn meta(self) -> &'static RouteMeta {
        &ROUTES[self as usize]
    }

    pub fn requires_auth(self) -> bool {
        AUTH_REQUIRED.contains(&self)
    }

    pub fn path(self) -> &'static str {
        self.meta().path
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Look up a route by its exact path.
pub fn find_by_path(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|meta| meta.path == path)
}

/// What the router should do with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RouteName),
}

/// Decide whether navigating to `to` may proceed.
pub fn guard(to: RouteName, authenticated: bool) -> GuardDecision {
    if to.requires_auth() && !authenticated {
        GuardDecision::Redirect(RouteName::Login)
    } else {
        GuardDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_name_has_exactly_one_route() {
        let names: HashSet<RouteName> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ROUTES.len());
        let paths: HashSet<&str> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_table_is_indexed_by_name() {
        for (i, meta) in ROUTES.iter().enumerate() {
            assert_eq!(meta.name as usize, i);
        }
    }

    #[test]
    fn test_meta_lookup() {
        assert_eq!(RouteName::Statistics.path(), "/statistics/summary");
        assert_eq!(RouteName::Budget.meta().title, Some("예산"));
        assert_eq!(RouteName::Popup.meta().title, None);
        assert_eq!(RouteName::Login.meta().layout, Layout::None);
        assert_eq!(RouteName::Login.meta().background_color, Some("#b7ccb4"));
        assert!(RouteName::Start.meta().center_content);
        assert!(!RouteName::Register.meta().center_content);
        assert_eq!(find_by_path("/mypage").map(|m| m.name), Some(RouteName::MyPage));
        assert!(find_by_path("/nowhere").is_none());
    }

    #[test]
    fn test_guard_redirects_anonymous_visitors() {
        for name in AUTH_REQUIRED {
            assert_eq!(
                guard(name, false),
                GuardDecision::Redirect(RouteName::Login),
                "{name} should require a session"
            );
            assert_eq!(guard(name, true), GuardDecision::Proceed);
        }
    }

    #[test]
    fn test_guard_lets_public_pages_through() {
        for name in [
            RouteName::Start,
            RouteName::Login,
            RouteName::Register,
            RouteName::Popup,
        ] {
            assert!(!name.requires_auth());
            assert_eq!(guard(name, false), GuardDecision::Proceed);
        }
    }
}
