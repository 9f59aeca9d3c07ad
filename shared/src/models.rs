use crate::role::Role;
use crate::serde_helper::{
    NumberOrString, float_or_string, int_or_string, opt_float_or_string, opt_string_or_number,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    /// 电话以字符串发送
    pub tel: String,
    pub password: String,
}

/// 后端错误响应体 `{ "message": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 用户 (Users)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role_id: Role,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub tel: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `GET /api/users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

// =========================================================
// 商品 (Products)
// =========================================================

/// 商品 ID，后端可能使用 `_id` 或 `id`，数字或字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Self(NumberOrString::deserialize(d)?.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie", default)]
    pub category: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(rename = "prix", deserialize_with = "float_or_string")]
    pub price: f64,
    #[serde(rename = "quantite", deserialize_with = "int_or_string")]
    pub quantity: i64,
    #[serde(rename = "fournisseur", default)]
    pub supplier: String,
}

/// 新建或编辑商品的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie")]
    pub category: String,
    pub reference: String,
    #[serde(rename = "prix")]
    pub price: f64,
    #[serde(rename = "quantite")]
    pub quantity: i64,
    #[serde(rename = "fournisseur")]
    pub supplier: String,
}

/// 仅更新库存数量 `{ "quantite": n }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    #[serde(rename = "quantite")]
    pub quantity: i64,
}

// =========================================================
// 订单 (Orders)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub product_id: i64,
    #[serde(rename = "quantite", deserialize_with = "int_or_string")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "opt_float_or_string")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "prix_total", default, deserialize_with = "opt_float_or_string")]
    pub total: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "User", default)]
    pub user: Option<OrderUser>,
    #[serde(rename = "OrderDetails", default)]
    pub details: Vec<OrderDetail>,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    pub fn seller_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    #[serde(rename = "quantite")]
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "orderDetails")]
    pub order_details: Vec<OrderLine>,
}

/// 接受单个对象或数组
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(list) => list,
            OneOrMany::One(item) => vec![item],
        }
    }
}

// =========================================================
// 报表 (Reports)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "nom")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(rename = "Product")]
    pub product: ProductRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationEntry {
    #[serde(rename = "Product")]
    pub product: ProductRef,
    #[serde(rename = "rotationRatio", deserialize_with = "float_or_string")]
    pub rotation_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub month: Option<String>,
    #[serde(rename = "totalSales", deserialize_with = "float_or_string")]
    pub total_sales: f64,
}

/// 销售报表的统计周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SalesPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl SalesPeriod {
    pub const ALL: [SalesPeriod; 3] = [SalesPeriod::Daily, SalesPeriod::Weekly, SalesPeriod::Monthly];

    /// URL 路径片段
    pub fn as_str(self) -> &'static str {
        match self {
            SalesPeriod::Daily => "daily",
            SalesPeriod::Weekly => "weekly",
            SalesPeriod::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            SalesPeriod::Daily => "Journalières",
            SalesPeriod::Weekly => "Hebdomadaires",
            SalesPeriod::Monthly => "Mensuelles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_from_backend_shape() {
        let order: Order = serde_json::from_value(json!({
            "id": 12,
            "status": "completed",
            "prix_total": "4500.00",
            "createdAt": "2025-01-05T10:00:00.000Z",
            "User": { "id": 3, "name": "Rova" },
            "OrderDetails": [{ "product_id": 7, "quantite": 3, "unit_price": 1500 }]
        }))
        .unwrap();

        assert!(order.is_completed());
        assert_eq!(order.total, Some(4500.0));
        assert_eq!(order.seller_name(), Some("Rova"));
        assert_eq!(order.details[0].unit_price, Some(1500.0));
        assert!(order.created_at.is_some());
    }

    #[test]
    fn test_order_without_optional_parts() {
        let order: Order = serde_json::from_value(json!({ "id": 1, "status": "pending" })).unwrap();
        assert_eq!(order.user, None);
        assert!(order.details.is_empty());
        assert_eq!(order.created_at, None);
    }

    #[test]
    fn test_product_id_aliases() {
        let p: Product = serde_json::from_value(json!({
            "_id": "65af01", "nom": "Paracétamol", "categorie": "Antalgique",
            "prix": 500, "quantite": "8", "fournisseur": "Sopharmad"
        }))
        .unwrap();
        assert_eq!(p.id.as_str(), "65af01");
        assert_eq!(p.id.as_number(), None);
        assert_eq!(p.quantity, 8);

        let p: Product = serde_json::from_value(json!({
            "id": 4, "nom": "Amoxicilline", "prix": "1200.5", "quantite": 40
        }))
        .unwrap();
        assert_eq!(p.id.as_number(), Some(4));
        assert_eq!(p.price, 1200.5);
        assert_eq!(p.category, "");
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<Order> =
            serde_json::from_value(json!({ "id": 1, "status": "pending" })).unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: OneOrMany<Order> =
            serde_json::from_value(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn test_create_order_wire_format() {
        let req = CreateOrderRequest {
            order_details: vec![OrderLine {
                product_id: 7,
                quantity: 2,
            }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "orderDetails": [{ "product_id": 7, "quantite": 2 }] })
        );
    }

    #[test]
    fn test_sales_period_paths() {
        assert_eq!(SalesPeriod::parse("weekly"), Some(SalesPeriod::Weekly));
        assert_eq!(SalesPeriod::parse("yearly"), None);
        assert_eq!(SalesPeriod::Monthly.label(), "Mensuelles");
    }
}
