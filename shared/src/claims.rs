//! 凭据声明解码
//!
//! 只做结构解码：`header.payload.signature` 三段，取中间段做
//! base64url 解码再解析 JSON。**不校验签名**，每次受保护请求由后端重新校验。

use crate::credential::Credential;
use crate::role::Role;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// 凭据结构不可解码
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("malformed credential: expected 3 segments, found {0}")]
    SegmentCount(usize),
    #[error("malformed credential: payload is not base64url ({0})")]
    Base64(#[from] base64::DecodeError),
    #[error("malformed credential: payload is not a claims object ({0})")]
    Json(#[from] serde_json::Error),
}

/// 解码后的声明
///
/// `role` 与 `email` 必填；`iat`/`exp` 可选且不会被强制检查；
/// 其余字段原样保留在 `extra` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// 读取任意附加字段
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// 解码凭据的载荷段
pub fn decode(credential: &Credential) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = credential.as_str().split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::SegmentCount(segments.len()));
    }

    // 兼容带 '=' 填充的编码
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::token;
    use serde_json::json;

    #[test]
    fn test_decode_required_and_optional_fields() {
        let cred = token(json!({
            "id": 42,
            "email": "admin@pharma.mg",
            "role": 1,
            "iat": 1_700_000_000,
            "exp": 1_700_086_400
        }));

        let claims = decode(&cred).unwrap();
        assert_eq!(claims.email, "admin@pharma.mg");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, Some(1_700_086_400));
        assert_eq!(claims.get("id"), Some(&json!(42)));
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let cred = token(json!({ "email": "a@b.c", "role": 2 }));
        let padded = {
            let parts: Vec<&str> = cred.as_str().split('.').collect();
            Credential::new(format!("{}.{}==.{}", parts[0], parts[1], parts[2]))
        };
        assert_eq!(decode(&padded).unwrap().role, Role::Seller);
    }

    #[test]
    fn test_not_a_jwt_is_malformed() {
        let err = decode(&Credential::new("not-a-jwt")).unwrap_err();
        assert!(matches!(err, ClaimsError::SegmentCount(1)));
    }

    #[test]
    fn test_bad_base64_is_malformed() {
        let err = decode(&Credential::new("aaa.!!!.ccc")).unwrap_err();
        assert!(matches!(err, ClaimsError::Base64(_)));
    }

    #[test]
    fn test_payload_must_be_claims_object() {
        let not_json = Credential::new(format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello")));
        assert!(matches!(decode(&not_json), Err(ClaimsError::Json(_))));

        // 缺少 role
        let missing_role = token(json!({ "email": "a@b.c" }));
        assert!(matches!(decode(&missing_role), Err(ClaimsError::Json(_))));

        // 缺少 email
        let missing_email = token(json!({ "role": 1 }));
        assert!(decode(&missing_email).is_err());
    }

    #[test]
    fn test_signature_is_never_checked() {
        let cred = token(json!({ "email": "a@b.c", "role": 1 }));
        let parts: Vec<&str> = cred.as_str().split('.').collect();
        let forged = Credential::new(format!("{}.{}.forged", parts[0], parts[1]));
        assert_eq!(decode(&forged).unwrap().role, Role::Admin);
    }
}
