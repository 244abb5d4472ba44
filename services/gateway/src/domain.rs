//! Request and response models of the REST surface.
//!
//! Request models describe what a caller must supply; response models are
//! what the gateway renders inside the envelope. Backend messages are
//! translated into the latter before they leave the gateway.

use serde::{Deserialize, Serialize};
use shared::proto;
use validator::Validate;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginModel {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryModel {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryModel {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductModel {
    #[validate(length(min = 1, message = "category_id is required"))]
    pub category_id: String,
    pub title: String,
    pub descrip: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductModel {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    pub title: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderModel {
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
    pub quantity: i32,
    pub user_name: String,
    pub user_address: String,
    pub user_phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserModel {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub user_type: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserModel {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub descrip: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub user_name: String,
    pub user_address: String,
    pub user_phone: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// Trimmed product projection embedded in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
}

/// Order enriched with the product it references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedOrder {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub user_name: String,
    pub user_address: String,
    pub user_phone: String,
    pub created_at: String,
    pub product: ProductSummary,
}

impl PackedOrder {
    /// Combine an order with the product fetched for it.
    ///
    /// Whatever product details the order backend embedded are replaced by the
    /// projection of `product`.
    pub fn pack(order: proto::GetOrderByIdResponse, product: proto::Product) -> Self {
        Self {
            id: order.id,
            product_id: product.id.clone(),
            quantity: order.quantity,
            user_name: order.user_name,
            user_address: order.user_address,
            user_phone: order.user_phone,
            created_at: order.created_at,
            product: ProductSummary {
                id: product.id,
                title: product.title,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub user_type: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
}

// ---------------------------------------------------------------------------
// Backend translation
// ---------------------------------------------------------------------------

impl From<proto::TokenResponse> for TokenResponse {
    fn from(t: proto::TokenResponse) -> Self {
        Self { token: t.token }
    }
}

impl From<proto::Category> for Category {
    fn from(c: proto::Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<proto::GetCategoryListResponse> for CategoryList {
    fn from(list: proto::GetCategoryListResponse) -> Self {
        Self {
            categories: list.categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::Product> for Product {
    fn from(p: proto::Product) -> Self {
        Self {
            id: p.id,
            category_id: p.category_id,
            title: p.title,
            descrip: p.descrip,
            price: p.price,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<proto::GetProductListResponse> for ProductList {
    fn from(list: proto::GetProductListResponse) -> Self {
        Self {
            products: list.products.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::Order> for Order {
    fn from(o: proto::Order) -> Self {
        Self {
            id: o.id,
            product_id: o.product_id,
            quantity: o.quantity,
            user_name: o.user_name,
            user_address: o.user_address,
            user_phone: o.user_phone,
            created_at: o.created_at,
        }
    }
}

impl From<proto::GetOrderListResponse> for OrderList {
    fn from(list: proto::GetOrderListResponse) -> Self {
        Self {
            orders: list.orders.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::User> for User {
    fn from(u: proto::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            user_type: u.user_type,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

impl From<proto::GetUserListResponse> for UserList {
    fn from(list: proto::GetUserListResponse) -> Self {
        Self {
            users: list.users.into_iter().map(Into::into).collect(),
        }
    }
}
