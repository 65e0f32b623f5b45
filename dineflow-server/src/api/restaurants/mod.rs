//! Restaurants API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/restaurants | GET | 所有餐厅 |
//! | /api/restaurants/{id}/tables/available | GET | 槽位空桌查询 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/tables/available", get(handler::available_tables))
}
