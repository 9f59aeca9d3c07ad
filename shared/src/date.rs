//! 日期工具
//!
//! - 解析后端返回的日期字符串与 `<input type="date">` 的值
//! - 法语格式化（`05 janv. 2025` / `05 janvier 2025`）
//! - 订单筛选用的闭区间 `DateRange`
//!
//! 所有日期按 UTC 计算。

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MONTHS_LONG: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

// =========================================================
// 解析
// =========================================================

/// 解析后端日期：RFC 3339、`YYYY-MM-DD HH:MM:SS` 或纯日期
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `<input type="date">` 的值；空串表示未设置
pub fn parse_date_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

// =========================================================
// 格式化
// =========================================================

/// `05 janv. 2025`
pub fn format_short_fr(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// `05 janvier 2025`
pub fn format_long_fr(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// 时间戳的短格式；缺失时显示 `-`
pub fn format_timestamp_short(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| format_short_fr(t.date_naive()))
        .unwrap_or_else(|| "-".to_string())
}

/// 报表日期标签：能解析则格式化，否则原样返回
pub fn report_label(raw: &str) -> String {
    parse_date(raw)
        .map(format_long_fr)
        .unwrap_or_else(|| raw.to_string())
}

// =========================================================
// DateRange
// =========================================================

/// 闭区间，两端都可省略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self::new(parse_date_input(start), parse_date_input(end))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// 结束日包含当天全天
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }

    /// 有界区间下，无时间戳的记录被排除
    pub fn contains(&self, ts: Option<DateTime<Utc>>) -> bool {
        match ts {
            Some(ts) => self.contains_date(ts.date_naive()),
            None => self.is_unbounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_french_formats() {
        assert_eq!(format_short_fr(d(2025, 1, 5)), "05 janv. 2025");
        assert_eq!(format_short_fr(d(2024, 8, 15)), "15 août 2024");
        assert_eq!(format_long_fr(d(2025, 1, 5)), "05 janvier 2025");
        assert_eq!(format_long_fr(d(2025, 12, 31)), "31 décembre 2025");
        assert_eq!(format_timestamp_short(None), "-");
    }

    #[test]
    fn test_parse_backend_shapes() {
        assert_eq!(parse_date("2025-01-05"), Some(d(2025, 1, 5)));
        assert_eq!(parse_date("2025-01-05T22:10:00.000Z"), Some(d(2025, 1, 5)));
        assert_eq!(parse_date("2025-01-05 08:00:00"), Some(d(2025, 1, 5)));
        assert_eq!(parse_date("semaine 2"), None);
        assert_eq!(report_label("2025-01-05"), "05 janvier 2025");
        assert_eq!(report_label("2025-W02"), "2025-W02");
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = DateRange::from_inputs("2025-01-01", "2025-01-31");
        let late_on_last_day = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 0).unwrap();
        let first_day = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

        assert!(range.contains(Some(late_on_last_day)));
        assert!(range.contains(Some(first_day)));
        assert!(!range.contains(Some(after)));
        assert!(!range.contains(None));
    }

    #[test]
    fn test_open_ended_ranges() {
        let ts = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        assert!(DateRange::default().contains(Some(ts)));
        assert!(DateRange::default().contains(None));
        assert!(DateRange::from_inputs("", "2020-06-01").contains(Some(ts)));
        assert!(!DateRange::from_inputs("2020-06-02", "").contains(Some(ts)));
        assert!(DateRange::from_inputs("garbage", "").is_unbounded());
    }
}
