//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM。
//! 定义应用的全部路由、访问要求，以及与会话守卫的组合。

use crate::credential::TokenStore;
use crate::role::Role;
use crate::session::{Decision, Session};
use std::fmt::Display;
use tracing::debug;

/// 路由访问要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 无需登录（登录、注册页）
    Public,
    /// 任意已登录角色
    Authenticated,
    /// 指定角色
    Role(Role),
}

impl Access {
    pub fn required_role(self) -> Option<Role> {
        match self {
            Access::Role(role) => Some(role),
            _ => None,
        }
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Signup,
    /// 管理后台首页 `/`
    Dashboard,
    Orders,
    Reports,
    Alerts,
    Users,
    /// 销售员面板
    Seller,
}

/// 静态路由描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub route: AppRoute,
    pub access: Access,
}

const fn admin(path: &'static str, route: AppRoute) -> RouteDescriptor {
    RouteDescriptor {
        path,
        route,
        access: Access::Role(Role::Admin),
    }
}

/// 路由表
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/login",
        route: AppRoute::Login,
        access: Access::Public,
    },
    RouteDescriptor {
        path: "/signup",
        route: AppRoute::Signup,
        access: Access::Public,
    },
    admin("/", AppRoute::Dashboard),
    admin("/orders", AppRoute::Orders),
    admin("/reports", AppRoute::Reports),
    admin("/alerts", AppRoute::Alerts),
    admin("/users", AppRoute::Users),
    RouteDescriptor {
        path: "/seller",
        route: AppRoute::Seller,
        access: Access::Role(Role::Seller),
    },
];

impl AppRoute {
    /// 守卫拒绝且角色不符时的去向
    pub const DEFAULT: AppRoute = AppRoute::Dashboard;

    /// 将 URL path 解析为路由；未声明的路径返回 `None`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        ROUTES
            .iter()
            .find(|d| d.path == normalized)
            .map(|d| d.route)
    }

    pub fn descriptor(self) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|d| d.route == self)
            .unwrap_or(&ROUTES[0])
    }

    /// 获取路由对应的 URL path
    pub fn to_path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn access(self) -> Access {
        self.descriptor().access
    }

    /// 是否属于管理后台布局（侧边栏）下的子页面
    pub fn in_admin_layout(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Orders | Self::Reports | Self::Alerts | Self::Users
        )
    }

    /// 登录成功后按角色跳转的目标
    pub fn home_for(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(Self::Dashboard),
            Role::Seller => Some(Self::Seller),
            Role::Other(_) => None,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 守卫组合 (Guard Composition)
// =========================================================

/// 一次导航请求的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl Navigation {
    pub fn target(self) -> AppRoute {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }
}

/// 对单个路由执行守卫
pub fn guard<S: TokenStore>(route: AppRoute, session: &Session<S>) -> Navigation {
    let decision = match route.access() {
        Access::Public => return Navigation::Render(route),
        Access::Authenticated => session.authorize(None),
        Access::Role(role) => session.authorize(Some(role)),
    };

    match decision {
        Decision::Allow => Navigation::Render(route),
        Decision::RedirectToLogin => Navigation::Redirect(AppRoute::Login),
        Decision::RedirectToDefault => Navigation::Redirect(AppRoute::DEFAULT),
    }
}

/// 解析路径并执行守卫；未匹配的路径一律去登录页
pub fn resolve<S: TokenStore>(path: &str, session: &Session<S>) -> Navigation {
    match AppRoute::from_path(path) {
        Some(route) => guard(route, session),
        None => Navigation::Redirect(AppRoute::Login),
    }
}

/// 沿重定向链求出最终渲染的路由
///
/// 默认页本身也可能拒绝当前角色（例如销售员访问 `/`），
/// 此时落到该角色的首页，没有首页则回到登录页。
pub fn settle<S: TokenStore>(path: &str, session: &Session<S>) -> AppRoute {
    let mut navigation = resolve(path, session);
    let mut visited = Vec::with_capacity(2);

    loop {
        match navigation {
            Navigation::Render(route) => return route,
            Navigation::Redirect(route) if visited.contains(&route) => {
                let fallback = session
                    .claims()
                    .and_then(|c| AppRoute::home_for(c.role))
                    .filter(|home| guard(*home, session) == Navigation::Render(*home))
                    .unwrap_or(AppRoute::Login);
                debug!(from = %path, to = %fallback, "redirect cycle, falling back to role home");
                return fallback;
            }
            Navigation::Redirect(route) => {
                visited.push(route);
                navigation = guard(route, session);
            }
        }
    }
}

// =========================================================
// 浏览器历史 (History)
// =========================================================

/// 对 History 栈的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push,
    Replace,
    Keep,
}

/// 一次路由变化：最终渲染的路由与对 History 的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub route: AppRoute,
    pub history: HistoryUpdate,
}

impl Transition {
    /// 页面加载或 popstate：地址栏已是 `path`，被重定向时替换当前记录
    pub fn enter<S: TokenStore>(path: &str, session: &Session<S>) -> Self {
        let route = settle(path, session);
        let history = if route.to_path() == path {
            HistoryUpdate::Keep
        } else {
            HistoryUpdate::Replace
        };
        Self { route, history }
    }

    /// 站内跳转：目标就是当前显示的页面时不新增记录
    pub fn navigate<S: TokenStore>(shown: AppRoute, path: &str, session: &Session<S>) -> Self {
        let route = settle(path, session);
        let history = if route == shown {
            HistoryUpdate::Keep
        } else {
            HistoryUpdate::Push
        };
        Self { route, history }
    }

    /// 渲染前复查：会话可能已变化
    pub fn render<S: TokenStore>(requested: AppRoute, session: &Session<S>) -> Self {
        let route = settle(requested.to_path(), session);
        let history = if route == requested {
            HistoryUpdate::Keep
        } else {
            HistoryUpdate::Replace
        };
        Self { route, history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{Credential, MemoryTokenStore};
    use crate::testing::{admin_token, seller_token};

    fn session(credential: Option<Credential>) -> Session<MemoryTokenStore> {
        Session::new(credential.map(MemoryTokenStore::with_credential).unwrap_or_default())
    }

    #[test]
    fn test_path_roundtrip() {
        for d in ROUTES {
            assert_eq!(AppRoute::from_path(d.path), Some(d.route));
            assert_eq!(d.route.to_path(), d.path);
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(AppRoute::from_path("/orders/"), Some(AppRoute::Orders));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::from_path("/users?page=2"), Some(AppRoute::Users));
        assert_eq!(AppRoute::from_path("/nope"), None);
        assert_eq!(AppRoute::from_path("/orders/12"), None);
    }

    #[test]
    fn test_route_table_access() {
        assert_eq!(AppRoute::Login.access(), Access::Public);
        assert_eq!(AppRoute::Signup.access(), Access::Public);
        assert_eq!(AppRoute::Seller.access(), Access::Role(Role::Seller));
        for route in [
            AppRoute::Dashboard,
            AppRoute::Orders,
            AppRoute::Reports,
            AppRoute::Alerts,
            AppRoute::Users,
        ] {
            assert_eq!(route.access().required_role(), Some(Role::Admin));
            assert!(route.in_admin_layout());
        }
        assert!(!AppRoute::Seller.in_admin_layout());
    }

    #[test]
    fn test_public_routes_are_unguarded() {
        let s = session(None);
        assert_eq!(resolve("/login", &s), Navigation::Render(AppRoute::Login));
        assert_eq!(resolve("/signup", &s), Navigation::Render(AppRoute::Signup));
    }

    #[test]
    fn test_unmatched_path_goes_to_login() {
        assert_eq!(
            resolve("/does/not/exist", &session(Some(admin_token()))),
            Navigation::Redirect(AppRoute::Login)
        );
        assert_eq!(
            resolve("/anything", &session(None)),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_scenario_orders_without_credential() {
        assert_eq!(
            resolve("/orders", &session(None)),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_scenario_seller_on_admin_page() {
        let nav = resolve("/users", &session(Some(seller_token())));
        assert_eq!(nav, Navigation::Redirect(AppRoute::Dashboard));
        assert_eq!(nav.target().to_path(), "/");
    }

    #[test]
    fn test_scenario_seller_on_seller_page() {
        assert_eq!(
            resolve("/seller", &session(Some(seller_token()))),
            Navigation::Render(AppRoute::Seller)
        );
    }

    #[test]
    fn test_scenario_not_a_jwt() {
        let s = session(Some(Credential::new("not-a-jwt")));
        for path in ["/", "/orders", "/reports", "/alerts", "/users"] {
            assert_eq!(resolve(path, &s), Navigation::Redirect(AppRoute::Login));
        }
    }

    #[test]
    fn test_admin_reaches_every_admin_page() {
        let s = session(Some(admin_token()));
        for path in ["/", "/orders", "/reports", "/alerts", "/users"] {
            assert!(matches!(resolve(path, &s), Navigation::Render(_)));
        }
        assert_eq!(resolve("/seller", &s), Navigation::Redirect(AppRoute::Dashboard));
    }

    #[test]
    fn test_settle_breaks_default_redirect_cycle() {
        // 销售员访问 `/` -> 默认页仍是 `/`，落到销售员首页
        assert_eq!(settle("/users", &session(Some(seller_token()))), AppRoute::Seller);
        assert_eq!(settle("/", &session(Some(seller_token()))), AppRoute::Seller);
    }

    #[test]
    fn test_settle_follows_simple_redirects() {
        assert_eq!(settle("/seller", &session(Some(admin_token()))), AppRoute::Dashboard);
        assert_eq!(settle("/orders", &session(None)), AppRoute::Login);
        assert_eq!(settle("/zzz", &session(None)), AppRoute::Login);
    }

    #[test]
    fn test_settle_unknown_role_lands_on_login() {
        let s = session(Some(crate::testing::token(
            serde_json::json!({ "email": "x@y.z", "role": 9 }),
        )));
        assert_eq!(settle("/", &s), AppRoute::Login);
    }

    #[test]
    fn test_navigate_to_shown_page_keeps_history() {
        let s = session(Some(admin_token()));
        let t = Transition::navigate(AppRoute::Orders, "/orders", &s);
        assert_eq!(t.route, AppRoute::Orders);
        assert_eq!(t.history, HistoryUpdate::Keep);

        let t = Transition::navigate(AppRoute::Orders, "/users", &s);
        assert_eq!(t.route, AppRoute::Users);
        assert_eq!(t.history, HistoryUpdate::Push);
    }

    #[test]
    fn test_redirect_back_to_shown_page_keeps_history() {
        // 未登录时停在登录页，再次访问受保护页面仍落回登录页
        let s = session(None);
        let t = Transition::navigate(AppRoute::Login, "/orders", &s);
        assert_eq!(t.route, AppRoute::Login);
        assert_eq!(t.history, HistoryUpdate::Keep);
    }

    #[test]
    fn test_enter_replaces_redirected_url() {
        let s = session(None);
        assert_eq!(
            Transition::enter("/users", &s),
            Transition {
                route: AppRoute::Login,
                history: HistoryUpdate::Replace,
            }
        );
        assert_eq!(Transition::enter("/login", &s).history, HistoryUpdate::Keep);
    }

    #[test]
    fn test_render_recheck_after_logout() {
        let s = session(Some(admin_token()));
        assert_eq!(
            Transition::render(AppRoute::Orders, &s).history,
            HistoryUpdate::Keep
        );
        s.logout();
        assert_eq!(
            Transition::render(AppRoute::Orders, &s),
            Transition {
                route: AppRoute::Login,
                history: HistoryUpdate::Replace,
            }
        );
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(AppRoute::home_for(Role::Admin), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::home_for(Role::Seller), Some(AppRoute::Seller));
        assert_eq!(AppRoute::home_for(Role::Other(5)), None);
    }
}
