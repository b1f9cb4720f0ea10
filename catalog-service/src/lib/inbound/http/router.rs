use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::count_products::count_products;
use super::handlers::create_product::create_product;
use super::handlers::create_provider::create_provider;
use super::handlers::delete_product::delete_product;
use super::handlers::delete_provider::delete_provider;
use super::handlers::get_product::get_product;
use super::handlers::get_provider::get_provider;
use super::handlers::list_products::list_products;
use super::handlers::list_providers::list_providers;
use super::handlers::login::login;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register::register;
use super::handlers::update_product::update_product;
use super::handlers::update_provider::update_provider;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::AccountService;
use crate::domain::product::service::ProductService;
use crate::domain::provider::service::ProviderService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub provider_service: Arc<ProviderService>,
    pub product_service: Arc<ProductService>,
}

pub fn create_router(
    account_service: Arc<AccountService>,
    provider_service: Arc<ProviderService>,
    product_service: Arc<ProductService>,
) -> Router {
    let state = AppState {
        account_service,
        provider_service,
        product_service,
    };

    let public_routes = Router::new()
        .route("/v1/register", post(register))
        .route("/v1/login", post(login))
        .route("/v1/utils/refresh-token", post(refresh_token));

    let protected_routes = Router::new()
        .route("/v1/auth/provider", post(create_provider))
        .route("/v1/auth/provider", get(list_providers))
        .route("/v1/auth/provider/:id", get(get_provider))
        .route("/v1/auth/provider/:id", patch(update_provider))
        .route("/v1/auth/provider/:id", delete(delete_provider))
        .route("/v1/auth/product", post(create_product))
        .route("/v1/auth/product", get(list_products))
        .route("/v1/auth/product/data/count", get(count_products))
        .route("/v1/auth/product/:id", get(get_product))
        .route("/v1/auth/product/:id", patch(update_product))
        .route("/v1/auth/product/:id", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
