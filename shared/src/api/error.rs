use super::request::HttpResponse;
use crate::models::ErrorBody;
use thiserror::Error;

/// 接口调用错误
///
/// 所有错误都可恢复：界面以模态框展示，页面数据保持原状。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 请求未能到达后端（网络错误、CORS 等）
    #[error("network error: {0}")]
    Transport(String),
    /// 非 2xx 响应；`message` 取自响应体 `{ "message": ... }`
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// 响应体不是预期的 JSON
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_response(resp: &HttpResponse) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status {
            status: resp.status,
            message,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 后端返回的错误信息
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// 模态框文本：优先使用后端信息，否则使用调用方给出的默认文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// 401；会话不会因此被自动清除
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_response(&resp(400, r#"{"message":"Email déjà utilisé"}"#));
        assert_eq!(err.user_message("Une erreur est survenue"), "Email déjà utilisé");
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn test_fallback_without_message() {
        for body in ["", "Internal Server Error", r#"{"error":"x"}"#, r#"{"message":"  "}"#] {
            let err = ApiError::from_response(&resp(500, body));
            assert_eq!(err.user_message("Opération échouée"), "Opération échouée");
        }
        let err = ApiError::Transport("offline".into());
        assert_eq!(err.user_message("Identifiants incorrects"), "Identifiants incorrects");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::from_response(&resp(401, "")).is_unauthorized());
        assert!(!ApiError::from_response(&resp(403, "")).is_unauthorized());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 404: no message");
    }
}
