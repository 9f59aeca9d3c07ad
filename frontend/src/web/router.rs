//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，
//! 验证交给共享层的路由表与会话守卫。

use leptos::prelude::*;
use pharmaboard_shared::route::{AppRoute, HistoryUpdate, Transition};
use pharmaboard_shared::Session;
use tracing::debug;
use wasm_bindgen::prelude::*;

use super::storage::BrowserTokenStore;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 按守卫结果更新 History
fn apply_history(transition: Transition) {
    match transition.history {
        HistoryUpdate::Push => push_history_state(transition.route.to_path()),
        HistoryUpdate::Replace => replace_history_state(transition.route.to_path()),
        HistoryUpdate::Keep => {}
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 会话由外部注入，每次导航与渲染都同步重新检查，不缓存结果。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前请求的路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 实际渲染出的路由（守卫之后），不参与响应式
    shown: StoredValue<AppRoute>,
    /// 注入的会话
    session: Session<BrowserTokenStore>,
}

impl RouterService {
    fn new(session: Session<BrowserTokenStore>) -> Self {
        // 1. 初始化当前路由（从 URL 解析并执行守卫）
        let initial = Transition::enter(&current_path(), &session);
        apply_history(initial);
        let (current_route, set_route) = signal(initial.route);

        Self {
            current_route,
            set_route,
            shown: StoredValue::new(initial.route),
            session,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        let transition = Transition::navigate(self.shown.get_value(), path, &self.session);
        if transition.history == HistoryUpdate::Keep {
            debug!(requested = path, shown = %transition.route, "already on target route");
            return;
        }
        if transition.route.to_path() != path {
            debug!(requested = path, to = %transition.route, "navigation redirected");
        }
        apply_history(transition);
        self.set_route.set(transition.route);
    }

    /// 导航到指定路由
    pub fn go(&self, target: AppRoute) {
        self.navigate(target.to_path());
    }

    /// 渲染前再次执行守卫；被拒绝时只替换当前 History 记录，
    /// 不回写路由信号，避免出口在同一次变化里渲染两遍
    fn checked(&self, requested: AppRoute) -> AppRoute {
        let transition = Transition::render(requested, &self.session);
        if transition.history == HistoryUpdate::Replace {
            debug!(requested = %requested, to = %transition.route, "render guard redirected");
        }
        apply_history(transition);
        self.shown.set_value(transition.route);
        transition.route
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑
            let transition = Transition::enter(&current_path(), &session);
            apply_history(transition);
            set_route.set(transition.route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Session<BrowserTokenStore>) -> RouterService {
    let router = RouterService::new(session);

    // 初始化监听器
    router.init_popstate_listener();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话上下文
    session: Session<BrowserTokenStore>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let requested = router.current_route().get();
        matcher(router.checked(requested))
    }
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(into, optional)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
