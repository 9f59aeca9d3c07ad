//! 宽松的数值反序列化
//!
//! 后端的数值字段（价格、库存、金额）有时以字符串形式返回，
//! 这里统一接受数字或数字字符串。

use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Int(v) => write!(f, "{v}"),
            NumberOrString::Float(v) => write!(f, "{v}"),
            NumberOrString::Text(s) => f.write_str(s),
        }
    }
}

/// 解析字符串开头的整数部分（`"12 boîtes"` -> 12）
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

pub(crate) fn int_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match NumberOrString::deserialize(d)? {
        NumberOrString::Int(v) => Ok(v),
        NumberOrString::Float(v) => Ok(v.trunc() as i64),
        NumberOrString::Text(s) => {
            parse_leading_int(&s).ok_or_else(|| de::Error::custom(format!("invalid integer: {s}")))
        }
    }
}

pub(crate) fn float_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match NumberOrString::deserialize(d)? {
        NumberOrString::Int(v) => Ok(v as f64),
        NumberOrString::Float(v) => Ok(v),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid number: {s}"))),
    }
}

pub(crate) fn opt_float_or_string<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrString>::deserialize(d)? {
        None => Ok(None),
        Some(NumberOrString::Int(v)) => Ok(Some(v as f64)),
        Some(NumberOrString::Float(v)) => Ok(Some(v)),
        Some(NumberOrString::Text(s)) => Ok(s.trim().parse().ok()),
    }
}

pub(crate) fn opt_string_or_number<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<NumberOrString>::deserialize(d)?.map(|v| v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int(" 7 boîtes"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "int_or_string")]
        qty: i64,
        #[serde(deserialize_with = "float_or_string")]
        price: f64,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        tel: Option<String>,
    }

    #[test]
    fn test_lenient_fields() {
        let row: Row =
            serde_json::from_str(r#"{"qty":"15","price":"1250.50","tel":341234567}"#).unwrap();
        assert_eq!(row.qty, 15);
        assert_eq!(row.price, 1250.5);
        assert_eq!(row.tel.as_deref(), Some("341234567"));

        let row: Row = serde_json::from_str(r#"{"qty":4,"price":300}"#).unwrap();
        assert_eq!(row.qty, 4);
        assert_eq!(row.price, 300.0);
        assert_eq!(row.tel, None);
    }
}
