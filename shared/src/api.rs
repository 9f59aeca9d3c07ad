//! 后端 REST 接口
//!
//! - `request`: HTTP 抽象层（`HttpClient` trait），浏览器实现在前端 crate
//! - `error`: 接口错误
//! - `client`: 类型化的接口客户端

pub mod client;
pub mod error;
pub mod request;

pub use client::PharmaApi;
pub use error::ApiError;
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
