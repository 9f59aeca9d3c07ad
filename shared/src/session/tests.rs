use super::*;
use crate::credential::MemoryTokenStore;
use crate::testing::{admin_token, seller_token, token};
use serde_json::json;

const ROLES: [Option<Role>; 4] = [
    None,
    Some(Role::Admin),
    Some(Role::Seller),
    Some(Role::Other(3)),
];

fn session_with(credential: Option<Credential>) -> Session<MemoryTokenStore> {
    match credential {
        Some(c) => Session::new(MemoryTokenStore::with_credential(c)),
        None => Session::new(MemoryTokenStore::new()),
    }
}

// =========================================================
// Tests
// =========================================================

#[test]
fn test_matching_role_is_allowed() {
    for role in [Role::Admin, Role::Seller, Role::Other(3)] {
        let session = session_with(Some(token(json!({ "email": "x@y.z", "role": role.id() }))));
        assert_eq!(session.authorize(Some(role)), Decision::Allow);
    }
}

#[test]
fn test_other_role_is_sent_to_default() {
    let session = session_with(Some(seller_token()));
    assert_eq!(session.authorize(Some(Role::Admin)), Decision::RedirectToDefault);

    // 不存在角色继承：管理员不能进入销售员页面
    let session = session_with(Some(admin_token()));
    assert_eq!(session.authorize(Some(Role::Seller)), Decision::RedirectToDefault);
}

#[test]
fn test_any_authenticated_role_when_unspecified() {
    assert_eq!(session_with(Some(admin_token())).authorize(None), Decision::Allow);
    assert_eq!(session_with(Some(seller_token())).authorize(None), Decision::Allow);
}

#[test]
fn test_absent_credential_redirects_to_login() {
    let session = session_with(None);
    for role in ROLES {
        assert_eq!(session.authorize(role), Decision::RedirectToLogin);
    }
}

#[test]
fn test_empty_credential_counts_as_absent() {
    let session = session_with(Some(Credential::new("")));
    assert!(!session.is_authenticated());
    assert_eq!(session.authorize(None), Decision::RedirectToLogin);
}

#[test]
fn test_malformed_credential_fails_closed() {
    let malformed = [
        Credential::new("not-a-jwt"),
        Credential::new("a.b"),
        Credential::new("a.%%%.c"),
        token(json!({ "email": "x@y.z" })),
        token(json!({ "email": "x@y.z", "role": "admin" })),
    ];

    for cred in malformed {
        let session = session_with(Some(cred));
        for role in ROLES {
            assert_eq!(session.authorize(role), Decision::RedirectToLogin);
        }
    }
}

#[test]
fn test_logout_revokes_previous_access() {
    let session = session_with(Some(admin_token()));
    assert_eq!(session.authorize(Some(Role::Admin)), Decision::Allow);

    session.logout();

    assert!(session.credential().is_none());
    for role in ROLES {
        assert_eq!(session.authorize(role), Decision::RedirectToLogin);
    }
}

#[test]
fn test_authorize_is_idempotent() {
    for cred in [None, Some(admin_token()), Some(seller_token()), Some(Credential::new("x"))] {
        let session = session_with(cred);
        for role in ROLES {
            assert_eq!(session.authorize(role), session.authorize(role));
        }
    }
}

#[test]
fn test_establish_stores_then_decodes() {
    let session = session_with(None);
    let claims = session.establish(admin_token()).unwrap();
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(session.credential(), Some(admin_token()));

    // 解码失败时凭据仍被保存，但守卫不会放行
    let err = session.establish(Credential::new("garbage"));
    assert!(err.is_err());
    assert_eq!(session.credential(), Some(Credential::new("garbage")));
    assert_eq!(session.authorize(None), Decision::RedirectToLogin);
}

#[test]
fn test_expired_claims_are_not_enforced() {
    let session = session_with(Some(token(json!({ "email": "x@y.z", "role": 1, "exp": 1 }))));
    assert_eq!(session.authorize(Some(Role::Admin)), Decision::Allow);
}
