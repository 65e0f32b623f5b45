//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅列表与空桌查询
//! - [`bookings`] - 预订创建
//! - [`payments`] - 押金支付
//! - [`admin`] - 后台管理接口

pub mod admin;
pub mod bookings;
pub mod health;
pub mod payments;
pub mod restaurants;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the full application router
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(restaurants::router())
        .merge(bookings::router())
        .merge(payments::router())
        .merge(admin::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
