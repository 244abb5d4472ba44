//! Wire contract of the backend services (protobuf package `e_commerce`).
//!
//! Messages are declared with `prost` derives so the contract lives in Rust
//! without a protoc step; field tags must match the backends' schema.

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Offset/limit/search window sent with every list call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRequest {
    #[prost(int32, tag = "1")]
    pub offset: i32,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(string, tag = "3")]
    pub search: String,
}

/// Lookup, update-target or delete-target by identifier.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IdRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

// ---------------------------------------------------------------------------
// CategoryService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Category {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub created_at: String,
    #[prost(string, tag = "4")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCategoryRequest {
    #[prost(string, tag = "1")]
    pub title: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCategoryRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCategoryListResponse {
    #[prost(message, repeated, tag = "1")]
    pub categories: Vec<Category>,
}

pub mod category_service {
    pub const CREATE_CATEGORY: &str = "/e_commerce.CategoryService/CreateCategory";
    pub const GET_CATEGORY_BY_ID: &str = "/e_commerce.CategoryService/GetCategoryById";
    pub const GET_CATEGORY_LIST: &str = "/e_commerce.CategoryService/GetCategoryList";
    pub const UPDATE_CATEGORY: &str = "/e_commerce.CategoryService/UpdateCategory";
    pub const DELETE_CATEGORY: &str = "/e_commerce.CategoryService/DeleteCategory";
}

// ---------------------------------------------------------------------------
// ProductService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub category_id: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub descrip: String,
    #[prost(double, tag = "5")]
    pub price: f64,
    #[prost(string, tag = "6")]
    pub created_at: String,
    #[prost(string, tag = "7")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(string, tag = "1")]
    pub category_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub descrip: String,
    #[prost(double, tag = "4")]
    pub price: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(double, tag = "3")]
    pub price: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductListResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<Product>,
}

pub mod product_service {
    pub const CREATE_PRODUCT: &str = "/e_commerce.ProductService/CreateProduct";
    pub const GET_PRODUCT_BY_ID: &str = "/e_commerce.ProductService/GetProductById";
    pub const GET_PRODUCT_LIST: &str = "/e_commerce.ProductService/GetProductList";
    pub const UPDATE_PRODUCT: &str = "/e_commerce.ProductService/UpdateProduct";
    pub const DELETE_PRODUCT: &str = "/e_commerce.ProductService/DeleteProduct";
}

// ---------------------------------------------------------------------------
// OrderService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Order {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub product_id: String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(string, tag = "4")]
    pub user_name: String,
    #[prost(string, tag = "5")]
    pub user_address: String,
    #[prost(string, tag = "6")]
    pub user_phone: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateOrderRequest {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
    #[prost(string, tag = "3")]
    pub user_name: String,
    #[prost(string, tag = "4")]
    pub user_address: String,
    #[prost(string, tag = "5")]
    pub user_phone: String,
}

/// Product reference embedded in an order lookup.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderProduct {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrderByIdResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub product: Option<OrderProduct>,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(string, tag = "4")]
    pub user_name: String,
    #[prost(string, tag = "5")]
    pub user_address: String,
    #[prost(string, tag = "6")]
    pub user_phone: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrderListResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
}

pub mod order_service {
    pub const CREATE_ORDER: &str = "/e_commerce.OrderService/CreateOrder";
    pub const GET_ORDER_BY_ID: &str = "/e_commerce.OrderService/GetOrderById";
    pub const GET_ORDER_LIST: &str = "/e_commerce.OrderService/GetOrderList";
}

// ---------------------------------------------------------------------------
// AuthService
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub username: String,
    #[prost(string, tag = "3")]
    pub user_type: String,
    #[prost(string, tag = "4")]
    pub created_at: String,
    #[prost(string, tag = "5")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenResponse {
    #[prost(string, tag = "1")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenRequest {
    #[prost(string, tag = "1")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasAccessResponse {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
    #[prost(bool, tag = "2")]
    pub has_access: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
    #[prost(string, tag = "3")]
    pub user_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateUserRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserListResponse {
    #[prost(message, repeated, tag = "1")]
    pub users: Vec<User>,
}

pub mod auth_service {
    pub const LOGIN: &str = "/e_commerce.AuthService/Login";
    pub const HAS_ACCESS: &str = "/e_commerce.AuthService/HasAccess";
    pub const CREATE_USER: &str = "/e_commerce.AuthService/CreateUser";
    pub const GET_USER_BY_ID: &str = "/e_commerce.AuthService/GetUserByID";
    pub const GET_USER_LIST: &str = "/e_commerce.AuthService/GetUserList";
    pub const UPDATE_USER: &str = "/e_commerce.AuthService/UpdateUser";
    pub const DELETE_USER: &str = "/e_commerce.AuthService/DeleteUser";
}
