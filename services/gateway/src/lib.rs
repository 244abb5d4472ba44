//! REST edge gateway over the category, product, order and auth backends.

pub mod auth;
pub mod backend;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod state;

use auth::{authorize, AccessPolicy, Gate};
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use handlers::{category, login, order, product, user};
use shared::{Capability, API_PREFIX};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Wrap every route of `routes` in the authorization gate with `policy`
fn guarded(routes: Router<AppState>, state: &AppState, policy: AccessPolicy) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(
        Gate::new(state, policy),
        authorize,
    ))
}

/// Routes under the version prefix, grouped by the policy that guards them
fn api_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new().route("/login", post(login::login));

    let authenticated = guarded(
        Router::new()
            .route("/category", get(category::list_categories))
            .route("/category/:id", get(category::get_category))
            .route("/product", get(product::list_products))
            .route("/product/:id", get(product::get_product))
            .route("/order", post(order::create_order).get(order::list_orders))
            .route("/order/:id", get(order::get_order)),
        state,
        AccessPolicy::Authenticated,
    );

    let catalog_admin = guarded(
        Router::new()
            .route(
                "/category",
                post(category::create_category).put(category::update_category),
            )
            .route("/category/:id", delete(category::delete_category))
            .route(
                "/product",
                post(product::create_product).put(product::update_product),
            )
            .route("/product/:id", delete(product::delete_product)),
        state,
        AccessPolicy::Require(Capability::ManageCatalog),
    );

    let user_admin = guarded(
        Router::new()
            .route(
                "/user",
                post(user::create_user)
                    .get(user::list_users)
                    .put(user::update_user),
            )
            .route("/user/:id", get(user::get_user).delete(user::delete_user)),
        state,
        AccessPolicy::Require(Capability::ManageUsers),
    );

    public
        .merge(authenticated)
        .merge(catalog_admin)
        .merge(user_admin)
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Versioned REST surface
        .nest(API_PREFIX, api_routes(&state))
        .fallback(handlers::route_not_found)
        // State
        .with_state(state)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)),
        )
}
