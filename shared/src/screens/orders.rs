//! 订单列表：搜索、日期区间、排序

use super::{contains_ci, normalize_query};
use crate::date::DateRange;
use crate::models::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Plus récentes",
            SortOrder::Oldest => "Plus anciennes",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub search: String,
    pub range: DateRange,
    pub sort: SortOrder,
}

impl OrderQuery {
    /// 搜索匹配订单号、销售员姓名或状态
    pub fn matches(&self, order: &Order) -> bool {
        let needle = normalize_query(&self.search);
        let search_hit = needle.is_empty()
            || order.id.to_string().contains(&needle)
            || order.seller_name().is_some_and(|n| contains_ci(n, &needle))
            || contains_ci(&order.status, &needle);

        search_hit && self.range.contains(order.created_at)
    }

    /// 过滤后排序；无时间戳的订单排在最旧一侧
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut out: Vec<&Order> = orders.iter().filter(|o| self.matches(o)).collect();
        match self.sort {
            SortOrder::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        out
    }
}
