//! Backend client set.
//!
//! One trait per backend service exposes its typed call surface. The gateway
//! only ever talks to the traits; [`grpc`] provides the tonic-backed
//! implementations used in production.

pub mod grpc;

use async_trait::async_trait;
use shared::proto::{
    Category, CreateCategoryRequest, CreateOrderRequest, CreateProductRequest, CreateUserRequest,
    GetCategoryListResponse, GetOrderByIdResponse, GetOrderListResponse, GetProductListResponse,
    GetUserListResponse, HasAccessResponse, IdRequest, ListRequest, LoginRequest, Order, Product,
    TokenRequest, TokenResponse, UpdateCategoryRequest, UpdateProductRequest, UpdateUserRequest,
    User,
};
use std::sync::Arc;

/// Failure of a single backend call, forwarded verbatim to the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with an error status
    #[error("{0}")]
    Rejected(String),

    /// The call never produced an answer (unreachable, cancelled, timed out)
    #[error("{0}")]
    Unavailable(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create_category(&self, req: CreateCategoryRequest) -> BackendResult<Category>;
    async fn get_category(&self, req: IdRequest) -> BackendResult<Category>;
    async fn list_categories(&self, req: ListRequest) -> BackendResult<GetCategoryListResponse>;
    async fn update_category(&self, req: UpdateCategoryRequest) -> BackendResult<Category>;
    async fn delete_category(&self, req: IdRequest) -> BackendResult<Category>;
}

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create_product(&self, req: CreateProductRequest) -> BackendResult<Product>;
    async fn get_product(&self, req: IdRequest) -> BackendResult<Product>;
    async fn list_products(&self, req: ListRequest) -> BackendResult<GetProductListResponse>;
    async fn update_product(&self, req: UpdateProductRequest) -> BackendResult<Product>;
    async fn delete_product(&self, req: IdRequest) -> BackendResult<Product>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(&self, req: CreateOrderRequest) -> BackendResult<Order>;
    async fn get_order(&self, req: IdRequest) -> BackendResult<GetOrderByIdResponse>;
    async fn list_orders(&self, req: ListRequest) -> BackendResult<GetOrderListResponse>;
}

/// Auth backend: credentials, access checks and user accounts
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, req: LoginRequest) -> BackendResult<TokenResponse>;
    async fn has_access(&self, req: TokenRequest) -> BackendResult<HasAccessResponse>;
    async fn create_user(&self, req: CreateUserRequest) -> BackendResult<User>;
    async fn get_user(&self, req: IdRequest) -> BackendResult<User>;
    async fn list_users(&self, req: ListRequest) -> BackendResult<GetUserListResponse>;
    async fn update_user(&self, req: UpdateUserRequest) -> BackendResult<User>;
    async fn delete_user(&self, req: IdRequest) -> BackendResult<User>;
}

/// Process-scoped handles to every backend.
///
/// Built once at startup and never mutated; cloning shares the handles.
#[derive(Clone)]
pub struct BackendClients {
    pub category: Arc<dyn CategoryService>,
    pub product: Arc<dyn ProductService>,
    pub order: Arc<dyn OrderService>,
    pub auth: Arc<dyn AuthService>,
}

impl BackendClients {
    pub fn new(
        category: Arc<dyn CategoryService>,
        product: Arc<dyn ProductService>,
        order: Arc<dyn OrderService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            category,
            product,
            order,
            auth,
        }
    }

    /// Release every handle held by this set.
    ///
    /// Connections close once the last clone of the set is gone, so call this
    /// after the server has stopped handing the set to requests.
    pub fn close(self) {
        let shared = Arc::strong_count(&self.category) > 1
            || Arc::strong_count(&self.product) > 1
            || Arc::strong_count(&self.order) > 1
            || Arc::strong_count(&self.auth) > 1;
        if shared {
            tracing::warn!("Closing backend clients while handles are still in use");
        }
        drop(self);
        tracing::info!("Backend connections closed");
    }
}
