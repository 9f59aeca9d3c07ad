//! 会话守卫
//!
//! 会话是显式传递的上下文对象，包装一个 [`TokenStore`]。
//! 每次导航或渲染受保护页面时同步求值，不缓存决策。

use crate::claims::{self, Claims, ClaimsError};
use crate::credential::{Credential, TokenStore};
use crate::role::Role;
use tracing::{debug, info};

/// 授权决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    /// 重定向到应用根路径 `/`
    RedirectToDefault,
}

/// 会话上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 当前凭据，空字符串视为不存在
    pub fn credential(&self) -> Option<Credential> {
        self.store.get().filter(|c| !c.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    /// 当前凭据的声明；凭据缺失或不可解码时为 `None`
    pub fn claims(&self) -> Option<Claims> {
        let credential = self.credential()?;
        match claims::decode(&credential) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "stored credential is not decodable");
                None
            }
        }
    }

    /// **核心守卫逻辑**
    ///
    /// `required` 为 `None` 时任意已登录角色均可访问。
    /// 解码失败按凭据缺失处理，绝不返回 `Allow`。
    pub fn authorize(&self, required: Option<Role>) -> Decision {
        let Some(claims) = self.claims() else {
            return Decision::RedirectToLogin;
        };

        match required {
            Some(role) if claims.role != role => {
                debug!(required = %role, actual = %claims.role, "role mismatch");
                Decision::RedirectToDefault
            }
            _ => Decision::Allow,
        }
    }

    /// 保存新签发的凭据并返回其声明
    ///
    /// 先原样保存再解码；解码失败时凭据仍留在存储中，
    /// 之后的守卫检查会按失败关闭处理。
    pub fn establish(&self, credential: Credential) -> Result<Claims, ClaimsError> {
        self.store.set(&credential);
        let claims = claims::decode(&credential)?;
        info!(email = %claims.email, role = %claims.role, "session established");
        Ok(claims)
    }

    /// 清除凭据（不通知后端）
    pub fn logout(&self) {
        self.store.clear();
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests;
