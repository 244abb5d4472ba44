//! tonic-backed implementations of the backend traits.
//!
//! Each backend gets exactly one long-lived channel, opened eagerly at startup.
//! No timeout, retry or pooling is layered on top: failures surface as they are.

use async_trait::async_trait;
use axum::http::uri::PathAndQuery;
use shared::proto::{
    auth_service, category_service, order_service, product_service, Category,
    CreateCategoryRequest, CreateOrderRequest, CreateProductRequest, CreateUserRequest,
    GetCategoryListResponse, GetOrderByIdResponse, GetOrderListResponse, GetProductListResponse,
    GetUserListResponse, HasAccessResponse, IdRequest, ListRequest, LoginRequest, Order, Product,
    TokenRequest, TokenResponse, UpdateCategoryRequest, UpdateProductRequest, UpdateUserRequest,
    User,
};
use std::sync::Arc;
use tonic::{
    client::Grpc,
    codec::ProstCodec,
    transport::{Channel, Endpoint},
    Code, Status,
};

use super::{
    AuthService, BackendClients, BackendError, BackendResult, CategoryService, OrderService,
    ProductService,
};
use crate::config::{BackendsConfig, ServiceEndpoint};

impl From<Status> for BackendError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => {
                BackendError::Unavailable(status.message().to_string())
            }
            _ => BackendError::Rejected(status.message().to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to connect to {service} backend at {uri}: {source}")]
pub struct ConnectError {
    pub service: &'static str,
    pub uri: String,
    #[source]
    pub source: tonic::transport::Error,
}

/// A single gRPC channel to one backend
#[derive(Debug, Clone)]
pub struct RpcChannel {
    service: &'static str,
    grpc: Grpc<Channel>,
}

impl RpcChannel {
    /// Open the channel, failing if the backend cannot be reached now
    pub async fn connect(
        service: &'static str,
        endpoint: &ServiceEndpoint,
    ) -> Result<Self, ConnectError> {
        let uri = endpoint.uri();
        let connect_error = |source| ConnectError {
            service,
            uri: uri.clone(),
            source,
        };

        let channel = Endpoint::from_shared(uri.clone())
            .map_err(connect_error)?
            .connect()
            .await
            .map_err(connect_error)?;

        tracing::info!(service, uri = %uri, "Backend connected");

        Ok(Self {
            service,
            grpc: Grpc::new(channel),
        })
    }

    /// Issue one unary call on `path`
    pub async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> BackendResult<Resp>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.grpc.clone();
        grpc.ready().await.map_err(|e| {
            BackendError::Unavailable(format!("{} service was not ready: {}", self.service, e))
        })?;

        tracing::debug!(service = self.service, path, "Calling backend");

        let codec = ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await
            .map_err(|status| {
                tracing::debug!(
                    service = self.service,
                    path,
                    code = ?status.code(),
                    "Backend call failed"
                );
                BackendError::from(status)
            })?;

        Ok(response.into_inner())
    }
}

pub struct GrpcCategoryService {
    channel: RpcChannel,
}

#[async_trait]
impl CategoryService for GrpcCategoryService {
    async fn create_category(&self, req: CreateCategoryRequest) -> BackendResult<Category> {
        self.channel.unary(category_service::CREATE_CATEGORY, req).await
    }

    async fn get_category(&self, req: IdRequest) -> BackendResult<Category> {
        self.channel.unary(category_service::GET_CATEGORY_BY_ID, req).await
    }

    async fn list_categories(&self, req: ListRequest) -> BackendResult<GetCategoryListResponse> {
        self.channel.unary(category_service::GET_CATEGORY_LIST, req).await
    }

    async fn update_category(&self, req: UpdateCategoryRequest) -> BackendResult<Category> {
        self.channel.unary(category_service::UPDATE_CATEGORY, req).await
    }

    async fn delete_category(&self, req: IdRequest) -> BackendResult<Category> {
        self.channel.unary(category_service::DELETE_CATEGORY, req).await
    }
}

pub struct GrpcProductService {
    channel: RpcChannel,
}

#[async_trait]
impl ProductService for GrpcProductService {
    async fn create_product(&self, req: CreateProductRequest) -> BackendResult<Product> {
        self.channel.unary(product_service::CREATE_PRODUCT, req).await
    }

    async fn get_product(&self, req: IdRequest) -> BackendResult<Product> {
        self.channel.unary(product_service::GET_PRODUCT_BY_ID, req).await
    }

    async fn list_products(&self, req: ListRequest) -> BackendResult<GetProductListResponse> {
        self.channel.unary(product_service::GET_PRODUCT_LIST, req).await
    }

    async fn update_product(&self, req: UpdateProductRequest) -> BackendResult<Product> {
        self.channel.unary(product_service::UPDATE_PRODUCT, req).await
    }

    async fn delete_product(&self, req: IdRequest) -> BackendResult<Product> {
        self.channel.unary(product_service::DELETE_PRODUCT, req).await
    }
}

pub struct GrpcOrderService {
    channel: RpcChannel,
}

#[async_trait]
impl OrderService for GrpcOrderService {
    async fn create_order(&self, req: CreateOrderRequest) -> BackendResult<Order> {
        self.channel.unary(order_service::CREATE_ORDER, req).await
    }

    async fn get_order(&self, req: IdRequest) -> BackendResult<GetOrderByIdResponse> {
        self.channel.unary(order_service::GET_ORDER_BY_ID, req).await
    }

    async fn list_orders(&self, req: ListRequest) -> BackendResult<GetOrderListResponse> {
        self.channel.unary(order_service::GET_ORDER_LIST, req).await
    }
}

pub struct GrpcAuthService {
    channel: RpcChannel,
}

#[async_trait]
impl AuthService for GrpcAuthService {
    async fn login(&self, req: LoginRequest) -> BackendResult<TokenResponse> {
        self.channel.unary(auth_service::LOGIN, req).await
    }

    async fn has_access(&self, req: TokenRequest) -> BackendResult<HasAccessResponse> {
        self.channel.unary(auth_service::HAS_ACCESS, req).await
    }

    async fn create_user(&self, req: CreateUserRequest) -> BackendResult<User> {
        self.channel.unary(auth_service::CREATE_USER, req).await
    }

    async fn get_user(&self, req: IdRequest) -> BackendResult<User> {
        self.channel.unary(auth_service::GET_USER_BY_ID, req).await
    }

    async fn list_users(&self, req: ListRequest) -> BackendResult<GetUserListResponse> {
        self.channel.unary(auth_service::GET_USER_LIST, req).await
    }

    async fn update_user(&self, req: UpdateUserRequest) -> BackendResult<User> {
        self.channel.unary(auth_service::UPDATE_USER, req).await
    }

    async fn delete_user(&self, req: IdRequest) -> BackendResult<User> {
        self.channel.unary(auth_service::DELETE_USER, req).await
    }
}

impl BackendClients {
    /// Connect to every backend; all four channels or none.
    ///
    /// Channels opened before a failing connect are dropped, and with them
    /// closed, before the error is returned.
    pub async fn connect(config: &BackendsConfig) -> Result<Self, ConnectError> {
        let category = RpcChannel::connect("category", &config.catalog).await?;
        let product = RpcChannel::connect("product", &config.catalog).await?;
        let order = RpcChannel::connect("order", &config.order).await?;
        let auth = RpcChannel::connect("auth", &config.auth).await?;

        Ok(BackendClients::new(
            Arc::new(GrpcCategoryService { channel: category }),
            Arc::new(GrpcProductService { channel: product }),
            Arc::new(GrpcOrderService { channel: order }),
            Arc::new(GrpcAuthService { channel: auth }),
        ))
    }
}
