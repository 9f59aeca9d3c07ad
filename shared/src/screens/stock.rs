//! 库存与预警

use super::{contains_ci, normalize_query, parse_int_input};
use crate::models::{Product, ProductInput};
use thiserror::Error;

/// 低于此值显示预警
pub const MIN_THRESHOLD: i64 = 10;
/// 高于此值显示预警
pub const MAX_THRESHOLD: i64 = 100;
/// 报表“库存临界”图表的上限
pub const CRITICAL_HIGH: i64 = 75;
/// 报表“库存临界”图表最多展示的商品数
pub const CRITICAL_LIMIT: usize = 4;

pub fn needs_alert(product: &Product) -> bool {
    product.quantity < MIN_THRESHOLD || product.quantity > MAX_THRESHOLD
}

/// 搜索名称、类别、供应商
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = normalize_query(query);
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || contains_ci(&p.name, &needle)
                || contains_ci(&p.category, &needle)
                || contains_ci(&p.supplier, &needle)
        })
        .collect()
}

/// 报表用：库存 < 10 或 > 75 的前 4 个商品
pub fn critical_products(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.quantity < MIN_THRESHOLD || p.quantity > CRITICAL_HIGH)
        .take(CRITICAL_LIMIT)
        .collect()
}

// =========================================================
// 数量调整
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOperation {
    Increment,
    Decrement,
}

impl QuantityOperation {
    pub fn title(self) -> &'static str {
        match self {
            QuantityOperation::Increment => "Ajouter une quantité",
            QuantityOperation::Decrement => "Retirer une quantité",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Veuillez entrer un nombre positif.")]
pub struct InvalidAdjustment;

/// 计算新库存；减少时下限为 0
pub fn adjust_quantity(
    current: i64,
    op: QuantityOperation,
    raw_amount: &str,
) -> Result<i64, InvalidAdjustment> {
    let amount = parse_int_input(raw_amount)
        .filter(|n| *n > 0)
        .ok_or(InvalidAdjustment)?;
    Ok(match op {
        QuantityOperation::Increment => current.saturating_add(amount),
        QuantityOperation::Decrement => current.saturating_sub(amount).max(0),
    })
}

// =========================================================
// 商品表单
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Le nom du produit est requis.")]
    MissingName,
    #[error("Le prix doit être un nombre.")]
    InvalidPrice,
    #[error("La quantité doit être un nombre entier.")]
    InvalidQuantity,
}

/// 新建/编辑弹窗的原始输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub reference: String,
    pub price: String,
    pub quantity: String,
    pub supplier: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            reference: product.reference.clone().unwrap_or_default(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            supplier: product.supplier.clone(),
        }
    }

    pub fn to_input(&self) -> Result<ProductInput, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::MissingName);
        }
        let price = self
            .price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or(ProductFormError::InvalidPrice)?;
        let quantity = parse_int_input(&self.quantity).ok_or(ProductFormError::InvalidQuantity)?;

        Ok(ProductInput {
            name: name.to_string(),
            category: self.category.trim().to_string(),
            reference: self.reference.trim().to_string(),
            price,
            quantity,
            supplier: self.supplier.trim().to_string(),
        })
    }
}
