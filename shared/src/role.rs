use serde::{Deserialize, Serialize};
use std::fmt;

/// 用户角色
///
/// 线上格式是整数：1 = 管理员，2 = 销售员。未知的整数原样保留，
/// 比较时严格按整数相等，不存在角色继承。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Role {
    Admin,
    Seller,
    Other(i64),
}

impl Role {
    pub const fn id(self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Seller => 2,
            Role::Other(id) => id,
        }
    }

    /// 界面上显示的角色名称
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            _ => "Vendeur",
        }
    }
}

impl From<i64> for Role {
    fn from(id: i64) -> Self {
        match id {
            1 => Role::Admin,
            2 => Role::Seller,
            other => Role::Other(other),
        }
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> Self {
        role.id()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_roundtrip_keeps_unknown_roles() {
        let role: Role = serde_json::from_str("7").unwrap();
        assert_eq!(role, Role::Other(7));
        assert_eq!(serde_json::to_string(&role).unwrap(), "7");
        assert_eq!(Role::from(1), Role::Admin);
        assert_eq!(Role::from(2), Role::Seller);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Admin.label(), "Administrateur");
        assert_eq!(Role::Seller.label(), "Vendeur");
        assert_eq!(Role::Other(3).label(), "Vendeur");
    }
}
