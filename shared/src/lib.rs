//! PharmaBoard 共享核心
//!
//! 与 DOM 无关的全部逻辑都在这里，可以直接在宿主机上测试：
//! - `credential` / `claims`: 凭据存储抽象与声明解码
//! - `session`: 会话守卫（授权决策）
//! - `route`: 静态路由表与守卫组合
//! - `api`: 后端 REST 协议与客户端
//! - `screens`: 各页面的列表过滤、排序与表单校验

pub mod api;
pub mod auth;
pub mod claims;
pub mod config;
pub mod credential;
pub mod date;
pub mod models;
pub mod protocol;
pub mod role;
pub mod route;
pub mod screens;
pub mod session;

mod serde_helper;

pub use claims::{Claims, ClaimsError};
pub use credential::{
    Credential, FallbackTokenStore, KeyValueStore, MemoryTokenStore, TOKEN_STORAGE_KEY, TokenStore,
};
pub use role::Role;
pub use route::{Access, AppRoute, Navigation};
pub use session::{Decision, Session};

// =========================================================
// 测试工具 (Test Utilities)
// =========================================================
