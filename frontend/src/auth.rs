//! 认证模块
//!
//! 管理会话上下文与后端客户端，与路由系统解耦。
//! 路由服务与页面都通过 Context 拿到同一个会话对象。

use crate::web::{BrowserTokenStore, FetchHttpClient};
use leptos::prelude::*;
use pharmaboard_shared::api::PharmaApi;
use pharmaboard_shared::config::AppConfig;
use pharmaboard_shared::Session;

pub type AppSession = Session<BrowserTokenStore>;
pub type AppApi = PharmaApi<FetchHttpClient>;

/// 应用上下文
///
/// 会话按值传递，后端客户端只含基地址。
#[derive(Clone)]
pub struct AppContext {
    pub session: AppSession,
    pub api: AppApi,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::new(BrowserTokenStore),
            api: PharmaApi::new(config.api_base_url.clone(), FetchHttpClient),
        }
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn use_session() -> AppSession {
    use_app().session
}

pub fn use_api() -> AppApi {
    use_app().api
}
