//! PharmaBoard 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `pharmaboard_shared::route`: 路由表与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话与后端客户端上下文
//! - `components`: UI 组件层

mod auth;
mod config;
mod logging;
mod components {
    mod charts;
    pub mod dashboard;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod modal;
    pub mod orders;
    pub mod reports;
    pub mod seller;
    pub mod signup;
    pub mod stock_alerts;
    pub mod users;
}

use crate::auth::AppContext;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::modal::{NoticeModal, provide_notifier};
use crate::components::orders::OrdersPage;
use crate::components::reports::ReportsPage;
use crate::components::seller::SellerPage;
use crate::components::signup::SignupPage;
use crate::components::stock_alerts::StockAlertsPage;
use crate::components::users::UsersPage;

use leptos::prelude::*;
use pharmaboard_shared::AppRoute;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use storage::{BrowserTokenStore, LocalStorage};
    pub use timer::Timeout;
}

use web::router::{Router, RouterOutlet};

pub use logging::init as init_logging;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。管理员页面共享侧边栏布局。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => return view! { <SignupPage /> }.into_any(),
        AppRoute::Seller => return view! { <SellerPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::Alerts => view! { <StockAlertsPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
    };

    view! { <AdminLayout active=route>{page}</AdminLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 解析配置并创建应用上下文
    let config = config::load();
    tracing::info!(api = %config.api_base_url, "starting PharmaBoard");
    let ctx = AppContext::new(&config);
    let session = ctx.session;
    provide_context(ctx);

    // 2. 全局提示框
    provide_notifier();

    view! {
        // 3. 路由器组件：注入会话实现守卫
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NoticeModal />
    }
}
