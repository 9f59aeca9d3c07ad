//! 运行时配置

/// 默认后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:4000";
/// Android 设备在局域网内访问开发机时使用的地址
pub const ANDROID_API_URL: &str = "http://192.168.43.19:4000";
/// 日志级别覆盖所用的 localStorage 键
pub const LOG_LEVEL_STORAGE_KEY: &str = "pharmaboard_log_level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// 解析后端地址
    ///
    /// 优先级：显式覆盖（编译期 `PHARMABOARD_API_URL`）> Android UA > 默认。
    pub fn resolve(override_url: Option<&str>, user_agent: Option<&str>) -> Self {
        let raw = override_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                if user_agent.is_some_and(is_android) {
                    ANDROID_API_URL
                } else {
                    DEFAULT_API_URL
                }
            });

        Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn is_android(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("android")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANDROID_UA: &str =
        "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Chrome/120.0 Mobile";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_user_agent_selects_address() {
        assert_eq!(AppConfig::resolve(None, Some(ANDROID_UA)).api_base_url, ANDROID_API_URL);
        assert_eq!(AppConfig::resolve(None, Some(DESKTOP_UA)).api_base_url, DEFAULT_API_URL);
        assert_eq!(AppConfig::default().api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        let cfg = AppConfig::resolve(Some("https://api.pharma.mg/ "), Some(ANDROID_UA));
        assert_eq!(cfg.api_base_url, "https://api.pharma.mg");

        let cfg = AppConfig::resolve(Some("  "), None);
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
    }
}
