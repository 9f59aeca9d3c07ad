use super::error::ApiError;
use super::request::{HttpClient, HttpRequest};
use crate::credential::Credential;
use crate::models::{
    BestSeller, CreateOrderRequest, LoginRequest, Order, OrderLine, Product, ProductId,
    ProductInput, QuantityUpdate, RotationEntry, SalesEntry, SalesPeriod, SignupRequest, User,
    UserProfile,
};
use crate::protocol::{
    ApiRequest, BestSellers, CreateProduct, CurrentUser, DeleteProduct, ListOrders, ListProducts,
    ListUsers, SalesReport, SetProductQuantity, StockRotation, UpdateProduct,
};
use tracing::{debug, warn};

/// 类型化的后端客户端
///
/// 通过泛型 `C: HttpClient` 与具体 HTTP 实现解耦。
#[derive(Clone, Debug)]
pub struct PharmaApi<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> PharmaApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送任意 [`ApiRequest`]
    ///
    /// `R::AUTHENTICATED` 为真且有凭据时附加 `Authorization: Bearer`。
    pub async fn send<R: ApiRequest>(
        &self,
        request: &R,
        credential: Option<&Credential>,
    ) -> Result<R::Response, ApiError> {
        let path = request.path();
        let mut req = HttpRequest::new(&self.url(&path), R::METHOD)
            .with_header("Accept", "application/json");

        if R::AUTHENTICATED
            && let Some(credential) = credential
        {
            req = req.with_header("Authorization", &credential.bearer());
        }

        if let Some(body) = request.body() {
            let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(json);
        }

        debug!(method = R::METHOD.as_str(), %path, "api request");
        let resp = self.client.send(req).await.inspect_err(|e| {
            warn!(method = R::METHOD.as_str(), %path, error = %e, "api transport failure");
        })?;

        if !resp.ok() {
            let err = ApiError::from_response(&resp);
            warn!(method = R::METHOD.as_str(), %path, error = %err, "api request rejected");
            return Err(err);
        }

        resp.json()
    }

    // =========================================================
    // Auth
    // =========================================================

    /// 登录，返回新签发的凭据
    pub async fn login(&self, email: &str, password: &str) -> Result<Credential, ApiError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(&req, None).await?;
        Ok(Credential::new(resp.token))
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<(), ApiError> {
        self.send(req, None).await.map(drop)
    }

    // =========================================================
    // Orders
    // =========================================================

    pub async fn orders(&self, credential: &Credential) -> Result<Vec<Order>, ApiError> {
        Ok(self.send(&ListOrders, Some(credential)).await?.into_vec())
    }

    pub async fn create_order(
        &self,
        credential: &Credential,
        lines: Vec<OrderLine>,
    ) -> Result<(), ApiError> {
        let req = CreateOrderRequest {
            order_details: lines,
        };
        self.send(&req, Some(credential)).await.map(drop)
    }

    // =========================================================
    // Products
    // =========================================================

    pub async fn products(&self, credential: &Credential) -> Result<Vec<Product>, ApiError> {
        self.send(&ListProducts, Some(credential)).await
    }

    pub async fn create_product(
        &self,
        credential: &Credential,
        input: ProductInput,
    ) -> Result<(), ApiError> {
        self.send(&CreateProduct(input), Some(credential))
            .await
            .map(drop)
    }

    pub async fn update_product(
        &self,
        credential: &Credential,
        id: ProductId,
        input: ProductInput,
    ) -> Result<(), ApiError> {
        self.send(&UpdateProduct { id, input }, Some(credential))
            .await
            .map(drop)
    }

    pub async fn set_product_quantity(
        &self,
        credential: &Credential,
        id: ProductId,
        quantity: i64,
    ) -> Result<(), ApiError> {
        let req = SetProductQuantity {
            id,
            update: QuantityUpdate { quantity },
        };
        self.send(&req, Some(credential)).await.map(drop)
    }

    pub async fn delete_product(
        &self,
        credential: &Credential,
        id: ProductId,
    ) -> Result<(), ApiError> {
        self.send(&DeleteProduct { id }, Some(credential))
            .await
            .map(drop)
    }

    // =========================================================
    // Users
    // =========================================================

    pub async fn users(&self, credential: &Credential) -> Result<Vec<User>, ApiError> {
        self.send(&ListUsers, Some(credential)).await
    }

    pub async fn current_user(&self, credential: &Credential) -> Result<UserProfile, ApiError> {
        self.send(&CurrentUser, Some(credential)).await
    }

    // =========================================================
    // Reports
    // =========================================================

    pub async fn best_sellers(&self, credential: &Credential) -> Result<Vec<BestSeller>, ApiError> {
        self.send(&BestSellers, Some(credential)).await
    }

    pub async fn sales_report(
        &self,
        credential: &Credential,
        period: SalesPeriod,
    ) -> Result<Vec<SalesEntry>, ApiError> {
        self.send(&SalesReport { period }, Some(credential)).await
    }

    pub async fn stock_rotation(
        &self,
        credential: &Credential,
    ) -> Result<Vec<RotationEntry>, ApiError> {
        self.send(&StockRotation, Some(credential)).await
    }

    /// 报表页首屏：畅销商品与商品列表并发获取，任一失败即失败
    pub async fn report_overview(
        &self,
        credential: &Credential,
    ) -> Result<(Vec<BestSeller>, Vec<Product>), ApiError> {
        futures::try_join!(self.best_sellers(credential), self.products(credential))
    }

    /// 销售员面板首屏：依次获取个人信息、商品、订单
    pub async fn seller_overview(
        &self,
        credential: &Credential,
    ) -> Result<(UserProfile, Vec<Product>, Vec<Order>), ApiError> {
        let me = self.current_user(credential).await?;
        let products = self.products(credential).await?;
        let orders = self.orders(credential).await?;
        Ok((me, products, orders))
    }

    /// 下单后刷新商品与订单
    pub async fn refresh_stock_and_orders(
        &self,
        credential: &Credential,
    ) -> Result<(Vec<Product>, Vec<Order>), ApiError> {
        futures::try_join!(self.products(credential), self.orders(credential))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{HttpMethod, MockHttpClient};
    use serde_json::json;

    const BASE: &str = "http://localhost:4000";

    fn api() -> PharmaApi<MockHttpClient> {
        PharmaApi::new(format!("{BASE}/"), MockHttpClient::new())
    }

    fn cred() -> Credential {
        Credential::new("h.p.s")
    }

    #[tokio::test]
    async fn test_login_is_unauthenticated_post() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Post,
            &format!("{BASE}/api/auth/login"),
            200,
            json!({ "token": "abc.def.ghi" }),
        );

        let credential = api.login("admin@pharma.mg", "secret").await.unwrap();
        assert_eq!(credential.as_str(), "abc.def.ghi");

        let req = api.client.last_request().unwrap();
        assert!(!req.headers.contains_key("Authorization"));
        assert_eq!(req.headers.get("Content-Type").map(String::as_str), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "admin@pharma.mg", "password": "secret" }));
    }

    #[tokio::test]
    async fn test_protected_calls_carry_bearer() {
        let api = api();
        api.client
            .mock_response(HttpMethod::Get, &format!("{BASE}/api/admin/users"), 200, json!([]));

        let users = api.users(&cred()).await.unwrap();
        assert!(users.is_empty());

        let req = api.client.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.headers.get("Authorization").map(String::as_str), Some("Bearer h.p.s"));
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_single_order_is_wrapped() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Get,
            &format!("{BASE}/api/orders"),
            200,
            json!({ "id": 5, "status": "pending" }),
        );

        let orders = api.orders(&cred()).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 5);
    }

    #[tokio::test]
    async fn test_product_mutations_hit_id_path() {
        let api = api();
        let url = format!("{BASE}/api/products/65af");
        api.client.mock_raw(HttpMethod::Put, &url, 200, "");
        api.client.mock_response(HttpMethod::Delete, &url, 200, json!({ "message": "ok" }));

        api.set_product_quantity(&cred(), ProductId::new("65af"), 12)
            .await
            .unwrap();
        let req = api.client.last_request().unwrap();
        assert_eq!(req.body.as_deref(), Some(r#"{"quantite":12}"#));

        api.delete_product(&cred(), ProductId::new("65af")).await.unwrap();
        assert_eq!(api.client.requests.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_error_response_keeps_server_message() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Post,
            &format!("{BASE}/api/auth/login"),
            401,
            json!({ "message": "Mot de passe incorrect" }),
        );

        let err = api.login("a@b.c", "bad").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Identifiants incorrects"), "Mot de passe incorrect");
    }

    #[tokio::test]
    async fn test_sales_report_path_per_period() {
        let api = api();
        for period in SalesPeriod::ALL {
            api.client.mock_response(
                HttpMethod::Get,
                &format!("{BASE}/api/reports/sales/{}", period.as_str()),
                200,
                json!([{ "date": "2025-01-05", "totalSales": 1000 }]),
            );
            let entries = api.sales_report(&cred(), period).await.unwrap();
            assert_eq!(entries[0].total_sales, 1000.0);
        }
    }

    #[tokio::test]
    async fn test_report_overview_fails_if_any_part_fails() {
        let api = api();
        api.client.mock_response(
            HttpMethod::Get,
            &format!("{BASE}/api/reports/best-seller-products/"),
            200,
            json!([{ "Product": { "nom": "Doliprane" } }]),
        );

        // 商品列表未配置 -> 传输错误
        let err = api.report_overview(&cred()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        api.client
            .mock_response(HttpMethod::Get, &format!("{BASE}/api/products"), 200, json!([]));
        let (best, products) = api.report_overview(&cred()).await.unwrap();
        assert_eq!(best[0].product.name, "Doliprane");
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let api = api();
        api.client
            .mock_raw(HttpMethod::Get, &format!("{BASE}/api/users/me"), 200, "<html>");
        let err = api.current_user(&cred()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
