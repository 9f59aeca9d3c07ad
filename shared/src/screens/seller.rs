//! 销售员面板：录入销售、个人订单

use super::parse_int_input;
use crate::models::{Order, OrderLine, Product};
use thiserror::Error;

pub const SALE_RECORDED_TITLE: &str = "Vente enregistrée";
pub const SALE_RECORDED_TEXT: &str = "La vente a été enregistrée avec succès.";
pub const SALE_FAILED: &str = "Échec de la vente";
pub const LOAD_FAILED: &str = "Impossible de charger la page";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    #[error("Veuillez sélectionner un produit et saisir une quantité valide.")]
    InvalidInput,
    #[error("Le produit sélectionné n'existe pas.")]
    UnknownProduct,
    #[error("Le stock disponible pour {0} est insuffisant.")]
    InsufficientStock(String),
}

impl SaleError {
    /// 模态框标题；正文为 `Display`
    pub fn title(&self) -> &'static str {
        match self {
            SaleError::InvalidInput => "Champs manquant ou invalide",
            SaleError::UnknownProduct => "Produit non trouvé",
            SaleError::InsufficientStock(_) => "Stock insuffisant",
        }
    }
}

/// 校验销售表单，得到下单行
///
/// `product_id` 为下拉框的值（商品 ID 字符串），`raw_quantity` 为数量输入。
pub fn validate_sale(
    products: &[Product],
    product_id: &str,
    raw_quantity: &str,
) -> Result<OrderLine, SaleError> {
    let product_id = product_id.trim();
    let quantity = parse_int_input(raw_quantity)
        .filter(|q| *q > 0 && !product_id.is_empty())
        .ok_or(SaleError::InvalidInput)?;

    let product = products
        .iter()
        .find(|p| p.id.as_str() == product_id)
        .ok_or(SaleError::UnknownProduct)?;
    // 下单接口只接受数字 ID
    let numeric_id = product.id.as_number().ok_or(SaleError::UnknownProduct)?;

    if quantity > product.quantity {
        return Err(SaleError::InsufficientStock(product.name.clone()));
    }

    Ok(OrderLine {
        product_id: numeric_id,
        quantity,
    })
}

/// 仅保留当前销售员自己的订单
pub fn seller_orders(orders: &[Order], seller_id: i64) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.user.as_ref().and_then(|u| u.id) == Some(seller_id))
        .collect()
}

/// 订单金额：首个明细的 `quantite * unit_price`，否则 `prix_total`
pub fn order_amount(order: &Order) -> Option<f64> {
    order
        .details
        .first()
        .and_then(|d| d.unit_price.map(|price| d.quantity as f64 * price))
        .or(order.total)
}

pub fn product_option_label(product: &Product) -> String {
    format!("{} (stock : {})", product.name, product.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderDetail, OrderUser, ProductId};

    fn product(id: &str, name: &str, qty: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            category: String::new(),
            reference: None,
            price: 1500.0,
            quantity: qty,
            supplier: String::new(),
        }
    }

    fn order(id: i64, user_id: Option<i64>, details: Vec<OrderDetail>, total: Option<f64>) -> Order {
        Order {
            id,
            status: "completed".into(),
            total,
            created_at: None,
            user: user_id.map(|id| OrderUser {
                id: Some(id),
                name: "Rasoa".into(),
            }),
            details,
        }
    }

    #[test]
    fn test_valid_sale() {
        let products = vec![product("3", "Doliprane", 10)];
        let line = validate_sale(&products, "3", "4").unwrap();
        assert_eq!(line, OrderLine { product_id: 3, quantity: 4 });
        assert!(validate_sale(&products, "3", "10").is_ok());
    }

    #[test]
    fn test_sale_validation_errors() {
        let products = vec![product("3", "Doliprane", 10)];

        for (id, qty) in [("", "2"), ("3", ""), ("3", "0"), ("3", "-1"), ("3", "abc")] {
            assert_eq!(validate_sale(&products, id, qty), Err(SaleError::InvalidInput));
        }
        assert_eq!(validate_sale(&products, "9", "1"), Err(SaleError::UnknownProduct));

        let err = validate_sale(&products, "3", "11").unwrap_err();
        assert_eq!(err.title(), "Stock insuffisant");
        assert_eq!(
            err.to_string(),
            "Le stock disponible pour Doliprane est insuffisant."
        );
    }

    #[test]
    fn test_seller_orders_filter() {
        let orders = vec![
            order(1, Some(2), vec![], None),
            order(2, Some(5), vec![], None),
            order(3, None, vec![], None),
        ];
        let mine: Vec<i64> = seller_orders(&orders, 2).iter().map(|o| o.id).collect();
        assert_eq!(mine, vec![1]);
    }

    #[test]
    fn test_order_amount() {
        let detail = |unit_price| OrderDetail {
            product_id: 3,
            quantity: 4,
            unit_price,
        };
        assert_eq!(order_amount(&order(1, None, vec![detail(Some(250.0))], Some(9.0))), Some(1000.0));
        assert_eq!(order_amount(&order(1, None, vec![detail(None)], Some(9.0))), Some(9.0));
        assert_eq!(order_amount(&order(1, None, vec![], None)), None);
    }
}
