//! Common test utilities: in-memory backends behind the gateway's traits
#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use gateway::{
    backend::{
        AuthService, BackendClients, BackendError, BackendResult, CategoryService, OrderService,
        ProductService,
    },
    build_router,
    state::AppState,
};
use serde_json::Value;
use shared::proto;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const CUSTOMER_TOKEN: &str = "customer-token";
pub const STRANGER_TOKEN: &str = "stranger-token";

/// Every backend at once, recording each call in order
#[derive(Default)]
pub struct FakeBackends {
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, BackendError>>,
    last_list: Mutex<Option<proto::ListRequest>>,
    categories: Mutex<HashMap<String, proto::Category>>,
    products: Mutex<HashMap<String, proto::Product>>,
    orders: Mutex<HashMap<String, proto::Order>>,
    users: Mutex<HashMap<String, proto::User>>,
    sessions: Mutex<HashMap<String, String>>,
    passwords: Mutex<HashMap<String, String>>,
}

impl FakeBackends {
    /// Backends seeded with an admin, a customer and a user of unknown role
    pub fn new() -> Arc<Self> {
        let fake = Arc::new(Self::default());
        fake.seed_user("u-admin", "admin", "secret", "ADMIN", ADMIN_TOKEN);
        fake.seed_user("u-customer", "ann", "hunter2", "CUSTOMER", CUSTOMER_TOKEN);
        fake.seed_user("u-stranger", "bob", "pw", "auditor", STRANGER_TOKEN);
        fake
    }

    pub fn clients(self: &Arc<Self>) -> BackendClients {
        BackendClients::new(self.clone(), self.clone(), self.clone(), self.clone())
    }

    /// Calls made so far, excluding the seeding done by tests
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made so far, without the gate's access checks
    pub fn resource_calls(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter(|call| *call != "auth.has_access")
            .collect()
    }

    pub fn last_list(&self) -> Option<proto::ListRequest> {
        self.last_list.lock().unwrap().clone()
    }

    /// Make every later `call` fail with `err`
    pub fn fail(&self, call: &'static str, err: BackendError) {
        self.failures.lock().unwrap().insert(call, err);
    }

    pub fn seed_user(&self, id: &str, username: &str, password: &str, user_type: &str, token: &str) {
        self.users.lock().unwrap().insert(
            id.to_string(),
            proto::User {
                id: id.to_string(),
                username: username.to_string(),
                user_type: user_type.to_string(),
                created_at: now(),
                updated_at: String::new(),
            },
        );
        self.passwords
            .lock()
            .unwrap()
            .insert(username.to_string(), password.to_string());
        self.sessions
            .lock()
            .unwrap()
            .insert(token.to_string(), id.to_string());
    }

    pub fn seed_category(&self, id: &str, title: &str) {
        self.categories.lock().unwrap().insert(
            id.to_string(),
            proto::Category {
                id: id.to_string(),
                title: title.to_string(),
                created_at: now(),
                updated_at: String::new(),
            },
        );
    }

    pub fn seed_product(&self, id: &str, category_id: &str, title: &str, price: f64) {
        self.products.lock().unwrap().insert(
            id.to_string(),
            proto::Product {
                id: id.to_string(),
                category_id: category_id.to_string(),
                title: title.to_string(),
                descrip: format!("{title} description"),
                price,
                created_at: now(),
                updated_at: String::new(),
            },
        );
    }

    pub fn seed_order(&self, id: &str, product_id: &str, quantity: i32) {
        self.orders.lock().unwrap().insert(
            id.to_string(),
            proto::Order {
                id: id.to_string(),
                product_id: product_id.to_string(),
                quantity,
                user_name: "Ann".to_string(),
                user_address: "1 Main st".to_string(),
                user_phone: "+1555000".to_string(),
                created_at: now(),
            },
        );
    }

    pub fn remove_product(&self, id: &str) {
        self.products.lock().unwrap().remove(id);
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn enter(&self, call: &'static str) -> BackendResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn record_list(&self, req: &proto::ListRequest) {
        *self.last_list.lock().unwrap() = Some(req.clone());
    }
}

fn now() -> String {
    "2024-05-01T10:00:00Z".to_string()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn missing(kind: &str, id: &str) -> BackendError {
    BackendError::Rejected(format!("{kind} {id} not found"))
}

fn page<T: Clone>(items: &HashMap<String, T>, req: &proto::ListRequest) -> Vec<T> {
    let mut keys: Vec<&String> = items.keys().collect();
    keys.sort();
    keys.into_iter()
        .skip(req.offset as usize)
        .take(req.limit as usize)
        .map(|key| items[key].clone())
        .collect()
}

#[async_trait]
impl CategoryService for FakeBackends {
    async fn create_category(&self, req: proto::CreateCategoryRequest) -> BackendResult<proto::Category> {
        self.enter("category.create")?;
        if req.title.is_empty() {
            return Err(BackendError::Rejected("title must not be empty".to_string()));
        }
        let id = new_id();
        self.seed_category(&id, &req.title);
        Ok(self.categories.lock().unwrap()[&id].clone())
    }

    async fn get_category(&self, req: proto::IdRequest) -> BackendResult<proto::Category> {
        self.enter("category.get")?;
        self.categories
            .lock()
            .unwrap()
            .get(&req.id)
            .cloned()
            .ok_or_else(|| missing("category", &req.id))
    }

    async fn list_categories(&self, req: proto::ListRequest) -> BackendResult<proto::GetCategoryListResponse> {
        self.enter("category.list")?;
        self.record_list(&req);
        Ok(proto::GetCategoryListResponse {
            categories: page(&self.categories.lock().unwrap(), &req),
        })
    }

    async fn update_category(&self, req: proto::UpdateCategoryRequest) -> BackendResult<proto::Category> {
        self.enter("category.update")?;
        let mut categories = self.categories.lock().unwrap();
        let category = categories
            .get_mut(&req.id)
            .ok_or_else(|| missing("category", &req.id))?;
        category.title = req.title;
        category.updated_at = now();
        Ok(category.clone())
    }

    async fn delete_category(&self, req: proto::IdRequest) -> BackendResult<proto::Category> {
        self.enter("category.delete")?;
        self.categories
            .lock()
            .unwrap()
            .remove(&req.id)
            .ok_or_else(|| missing("category", &req.id))
    }
}

#[async_trait]
impl ProductService for FakeBackends {
    async fn create_product(&self, req: proto::CreateProductRequest) -> BackendResult<proto::Product> {
        self.enter("product.create")?;
        if !self.categories.lock().unwrap().contains_key(&req.category_id) {
            return Err(missing("category", &req.category_id));
        }
        let id = new_id();
        let product = proto::Product {
            id: id.clone(),
            category_id: req.category_id,
            title: req.title,
            descrip: req.descrip,
            price: req.price,
            created_at: now(),
            updated_at: String::new(),
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn get_product(&self, req: proto::IdRequest) -> BackendResult<proto::Product> {
        self.enter("product.get")?;
        self.products
            .lock()
            .unwrap()
            .get(&req.id)
            .cloned()
            .ok_or_else(|| missing("product", &req.id))
    }

    async fn list_products(&self, req: proto::ListRequest) -> BackendResult<proto::GetProductListResponse> {
        self.enter("product.list")?;
        self.record_list(&req);
        Ok(proto::GetProductListResponse {
            products: page(&self.products.lock().unwrap(), &req),
        })
    }

    async fn update_product(&self, req: proto::UpdateProductRequest) -> BackendResult<proto::Product> {
        self.enter("product.update")?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .get_mut(&req.id)
            .ok_or_else(|| missing("product", &req.id))?;
        product.title = req.title;
        product.price = req.price;
        product.updated_at = now();
        Ok(product.clone())
    }

    async fn delete_product(&self, req: proto::IdRequest) -> BackendResult<proto::Product> {
        self.enter("product.delete")?;
        self.products
            .lock()
            .unwrap()
            .remove(&req.id)
            .ok_or_else(|| missing("product", &req.id))
    }
}

#[async_trait]
impl OrderService for FakeBackends {
    async fn create_order(&self, req: proto::CreateOrderRequest) -> BackendResult<proto::Order> {
        self.enter("order.create")?;
        let order = proto::Order {
            id: new_id(),
            product_id: req.product_id,
            quantity: req.quantity,
            user_name: req.user_name,
            user_address: req.user_address,
            user_phone: req.user_phone,
            created_at: now(),
        };
        self.orders
            .lock()
            .unwrap()
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn get_order(&self, req: proto::IdRequest) -> BackendResult<proto::GetOrderByIdResponse> {
        self.enter("order.get")?;
        let order = self
            .orders
            .lock()
            .unwrap()
            .get(&req.id)
            .cloned()
            .ok_or_else(|| missing("order", &req.id))?;
        Ok(proto::GetOrderByIdResponse {
            id: order.id,
            product: Some(proto::OrderProduct {
                id: order.product_id,
                title: String::new(),
            }),
            quantity: order.quantity,
            user_name: order.user_name,
            user_address: order.user_address,
            user_phone: order.user_phone,
            created_at: order.created_at,
        })
    }

    async fn list_orders(&self, req: proto::ListRequest) -> BackendResult<proto::GetOrderListResponse> {
        self.enter("order.list")?;
        self.record_list(&req);
        Ok(proto::GetOrderListResponse {
            orders: page(&self.orders.lock().unwrap(), &req),
        })
    }
}

#[async_trait]
impl AuthService for FakeBackends {
    async fn login(&self, req: proto::LoginRequest) -> BackendResult<proto::TokenResponse> {
        self.enter("auth.login")?;
        let known = self.passwords.lock().unwrap().get(&req.username).cloned();
        if known.as_deref() != Some(req.password.as_str()) {
            return Err(BackendError::Rejected("invalid username or password".to_string()));
        }
        let user_id = self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.username == req.username)
            .map(|user| user.id.clone())
            .ok_or_else(|| missing("user", &req.username))?;
        let token = new_id();
        self.sessions.lock().unwrap().insert(token.clone(), user_id);
        Ok(proto::TokenResponse { token })
    }

    async fn has_access(&self, req: proto::TokenRequest) -> BackendResult<proto::HasAccessResponse> {
        self.enter("auth.has_access")?;
        let user = self
            .sessions
            .lock()
            .unwrap()
            .get(&req.token)
            .and_then(|user_id| self.users.lock().unwrap().get(user_id).cloned());
        Ok(proto::HasAccessResponse {
            has_access: user.is_some(),
            user,
        })
    }

    async fn create_user(&self, req: proto::CreateUserRequest) -> BackendResult<proto::User> {
        self.enter("user.create")?;
        if self.passwords.lock().unwrap().contains_key(&req.username) {
            return Err(BackendError::Rejected(format!(
                "username {} already taken",
                req.username
            )));
        }
        let id = new_id();
        let token = new_id();
        self.seed_user(&id, &req.username, &req.password, &req.user_type, &token);
        Ok(self.users.lock().unwrap()[&id].clone())
    }

    async fn get_user(&self, req: proto::IdRequest) -> BackendResult<proto::User> {
        self.enter("user.get")?;
        self.users
            .lock()
            .unwrap()
            .get(&req.id)
            .cloned()
            .ok_or_else(|| missing("user", &req.id))
    }

    async fn list_users(&self, req: proto::ListRequest) -> BackendResult<proto::GetUserListResponse> {
        self.enter("user.list")?;
        self.record_list(&req);
        Ok(proto::GetUserListResponse {
            users: page(&self.users.lock().unwrap(), &req),
        })
    }

    async fn update_user(&self, req: proto::UpdateUserRequest) -> BackendResult<proto::User> {
        self.enter("user.update")?;
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&req.id).ok_or_else(|| missing("user", &req.id))?;
        self.passwords
            .lock()
            .unwrap()
            .insert(user.username.clone(), req.password);
        user.updated_at = now();
        Ok(user.clone())
    }

    async fn delete_user(&self, req: proto::IdRequest) -> BackendResult<proto::User> {
        self.enter("user.delete")?;
        self.users
            .lock()
            .unwrap()
            .remove(&req.id)
            .ok_or_else(|| missing("user", &req.id))
    }
}

/// Gateway router over `backends`, ready for requests
pub fn server(backends: &Arc<FakeBackends>) -> TestServer {
    let app = build_router(AppState::new(backends.clients()));
    TestServer::new(app).expect("Failed to start test server")
}

pub fn token(value: &'static str) -> HeaderValue {
    HeaderValue::from_static(value)
}

/// Assert the body is exactly one of the two envelope shapes
pub fn assert_envelope(body: &Value) {
    let has_data = body.get("data").is_some();
    let has_error = body.get("error").is_some();
    assert!(has_data ^ has_error, "body must carry data xor error: {body}");
    if has_data {
        assert_eq!(body["message"], "OK", "success envelope message: {body}");
    }
}

/// Error text of an error envelope
pub fn error_of(body: &Value) -> String {
    assert_envelope(body);
    body["error"]
        .as_str()
        .expect("error envelope carries a string")
        .to_string()
}
