//! 用户列表

use super::{contains_ci, normalize_query};
use crate::date::format_timestamp_short;
use crate::models::User;

pub const PHONE_PREFIX: &str = "+261";
pub const LOAD_FAILED: &str =
    "Impossible de récupérer les utilisateurs depuis la base de données.";

/// 搜索 ID、姓名、邮箱
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = normalize_query(query);
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || u.id.to_string().contains(&needle)
                || contains_ci(&u.name, &needle)
                || contains_ci(&u.email, &needle)
        })
        .collect()
}

pub fn display_phone(user: &User) -> String {
    match user.tel.as_deref().map(str::trim) {
        Some(tel) if !tel.is_empty() => format!("{PHONE_PREFIX} {tel}"),
        _ => "-".to_string(),
    }
}

pub fn display_created_at(user: &User) -> String {
    format_timestamp_short(user.created_at)
}
