use crate::api::HttpMethod;
use crate::models::{
    BestSeller, CreateOrderRequest, LoginRequest, LoginResponse, OneOrMany, Order, Product,
    ProductId, ProductInput, QuantityUpdate, RotationEntry, SalesEntry, SalesPeriod, SignupRequest,
    User, UserProfile,
};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::borrow::Cow;

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The JSON body, `()` when the request has none.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer credential is attached.
    const AUTHENTICATED: bool = true;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> Cow<'_, str>;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> Cow<'_, str> {
        "/api/auth/login".into()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

impl ApiRequest for SignupRequest {
    type Body = Self;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> Cow<'_, str> {
        "/api/auth/signup".into()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

// =========================================================
// Orders
// =========================================================

/// List orders. The backend may answer with a single object.
#[derive(Debug, Clone, Copy)]
pub struct ListOrders;

impl ApiRequest for ListOrders {
    type Body = ();
    type Response = OneOrMany<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/orders".into()
    }
}

impl ApiRequest for CreateOrderRequest {
    type Body = Self;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'_, str> {
        "/api/orders".into()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

// =========================================================
// Products
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct ListProducts;

impl ApiRequest for ListProducts {
    type Body = ();
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/products".into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateProduct(pub ProductInput);

impl ApiRequest for CreateProduct {
    type Body = ProductInput;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'_, str> {
        "/api/products".into()
    }

    fn body(&self) -> Option<&ProductInput> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: ProductId,
    pub input: ProductInput,
}

impl ApiRequest for UpdateProduct {
    type Body = ProductInput;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/products/{}", self.id).into()
    }

    fn body(&self) -> Option<&ProductInput> {
        Some(&self.input)
    }
}

/// Partial update carrying only the new stock quantity.
#[derive(Debug, Clone)]
pub struct SetProductQuantity {
    pub id: ProductId,
    pub update: QuantityUpdate,
}

impl ApiRequest for SetProductQuantity {
    type Body = QuantityUpdate;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/products/{}", self.id).into()
    }

    fn body(&self) -> Option<&QuantityUpdate> {
        Some(&self.update)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteProduct {
    pub id: ProductId,
}

impl ApiRequest for DeleteProduct {
    type Body = ();
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/products/{}", self.id).into()
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct ListUsers;

impl ApiRequest for ListUsers {
    type Body = ();
    type Response = Vec<User>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/admin/users".into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CurrentUser;

impl ApiRequest for CurrentUser {
    type Body = ();
    type Response = UserProfile;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/users/me".into()
    }
}

// =========================================================
// Reports
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct BestSellers;

impl ApiRequest for BestSellers {
    type Body = ();
    type Response = Vec<BestSeller>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/reports/best-seller-products/".into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SalesReport {
    pub period: SalesPeriod,
}

impl ApiRequest for SalesReport {
    type Body = ();
    type Response = Vec<SalesEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/reports/sales/{}", self.period.as_str()).into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StockRotation;

impl ApiRequest for StockRotation {
    type Body = ();
    type Response = Vec<RotationEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'_, str> {
        "/api/reports/rotate-stock".into()
    }
}
