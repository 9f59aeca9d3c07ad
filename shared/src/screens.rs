//! 各页面的纯逻辑
//!
//! 列表过滤、排序、表单校验与展示文本。组件只负责取数和渲染。

pub mod orders;
pub mod reports;
pub mod seller;
pub mod signup;
pub mod stock;
pub mod users;

/// 取数时本地没有凭据
pub const NOT_AUTHENTICATED_TITLE: &str = "Non authentifié";
pub const NOT_AUTHENTICATED_TEXT: &str = "Veuillez vous connecter.";

/// `3 résultats` / `1 résultat`
pub fn result_count_label(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} résultat{plural}")
}

/// 大小写不敏感的包含匹配；查询已小写化
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// 规范化搜索词
pub(crate) fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 金额展示；整数不带小数位
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0} Ar")
    } else {
        format!("{amount:.2} Ar")
    }
}

/// 表单里的整数输入，空白与非数字返回 `None`
pub fn parse_int_input(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_count_pluralizes() {
        assert_eq!(result_count_label(0), "0 résultat");
        assert_eq!(result_count_label(1), "1 résultat");
        assert_eq!(result_count_label(12), "12 résultats");
    }

    #[test]
    fn test_amount_and_int_input() {
        assert_eq!(format_amount(4500.0), "4500 Ar");
        assert_eq!(format_amount(12.5), "12.50 Ar");
        assert_eq!(parse_int_input(" 7 "), Some(7));
        assert_eq!(parse_int_input("7.5"), None);
        assert_eq!(parse_int_input(""), None);
    }
}
