//! DineFlow Server - 餐厅订座后端
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): 餐厅目录、空桌查询、预订、支付、后台管理
//! - **预订域** (`bookings`): 可用性/预订/支付一致性流程
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (models + repository)
//! - **支付** (`payments`): Stripe REST 网关 (可注入 mock)
//! - **通知** (`notify`): 支付成功后的 SMS/邮件，后台 worker 发送
//!
//! # 模块结构
//!
//! ```text
//! dineflow-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── bookings/      # 预订域流程
//! ├── db/            # 数据库层
//! ├── payments/      # 支付网关
//! ├── notify/        # 通知服务
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod bookings;
pub mod core;
pub mod db;
pub mod notify;
pub mod payments;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use notify::NotificationService;
pub use payments::{ChargeOutcome, ChargeRequest, GatewayError, PaymentGateway};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____  _            ______
   / __ \(_)___  ___  / ____/ /___ _      __
  / / / / / __ \/ _ \/ /_  / / __ \ | /| / /
 / /_/ / / / / /  __/ __/ / / /_/ / |/ |/ /
/_____/_/_/ /_/\___/_/   /_/\____/|__/|__/
    "#
    );
}
