//! 启动时解析运行配置

use pharmaboard_shared::config::AppConfig;

/// 编译期 `PHARMABOARD_API_URL` 优先，否则按 User-Agent 选择
pub fn load() -> AppConfig {
    let user_agent = web_sys::window().and_then(|w| w.navigator().user_agent().ok());
    AppConfig::resolve(option_env!("PHARMABOARD_API_URL"), user_agent.as_deref())
}
