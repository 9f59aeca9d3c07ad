//! 登录 / 注册 / 登出流程
//!
//! 与界面无关：结果是一个导航目标，由调用方交给路由执行。

use crate::api::{ApiError, HttpClient, PharmaApi};
use crate::claims::ClaimsError;
use crate::credential::TokenStore;
use crate::models::SignupRequest;
use crate::route::AppRoute;
use crate::session::Session;
use thiserror::Error;
use tracing::{info, warn};

pub const LOGIN_FAILED: &str = "Identifiants incorrects";
pub const SIGNUP_FAILED: &str = "Une erreur est survenue lors de l'inscription";

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// 后端签发的凭据无法解码；凭据仍已写入存储，守卫会将其视为缺失
    #[error(transparent)]
    Claims(#[from] ClaimsError),
}

impl LoginError {
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Api(e) => e.user_message(LOGIN_FAILED),
            LoginError::Claims(_) => LOGIN_FAILED.to_string(),
        }
    }
}

/// 登录
///
/// 成功时凭据已写入存储，返回该角色的首页；未知角色返回 `None`（停留在登录页）。
pub async fn login<C, S>(
    api: &PharmaApi<C>,
    session: &Session<S>,
    email: &str,
    password: &str,
) -> Result<Option<AppRoute>, LoginError>
where
    C: HttpClient,
    S: TokenStore,
{
    let credential = api.login(email.trim(), password).await?;
    let claims = session.establish(credential).inspect_err(|e| {
        warn!(error = %e, "login returned an undecodable credential");
    })?;

    let target = AppRoute::home_for(claims.role);
    info!(email = %claims.email, role = %claims.role, ?target, "login succeeded");
    Ok(target)
}

/// 注册；成功后回到登录页
pub async fn signup<C: HttpClient>(
    api: &PharmaApi<C>,
    request: &SignupRequest,
) -> Result<AppRoute, ApiError> {
    api.signup(request).await?;
    info!(email = %request.email, "account created");
    Ok(AppRoute::Login)
}

/// 登出：清除凭据，返回登录页
pub fn logout<S: TokenStore>(session: &Session<S>) -> AppRoute {
    session.logout();
    AppRoute::Login
}
