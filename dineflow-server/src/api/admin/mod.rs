//! Admin API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/admin/restaurants | POST | 创建餐厅 |
//! | /api/admin/bookings | GET | 所有预订 (含餐厅) |
//! | /api/admin/bookings/{id}/status | PUT | 覆写预订状态 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

// TODO: attach an auth middleware via route_layer once an admin auth scheme
// exists; these routes are currently unauthenticated.
fn routes() -> Router<ServerState> {
    Router::new()
        .route("/restaurants", post(handler::create_restaurant))
        .route("/bookings", get(handler::list_bookings))
        .route("/bookings/{id}/status", put(handler::update_booking_status))
}
