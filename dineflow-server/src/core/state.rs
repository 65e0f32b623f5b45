use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::notify::NotificationService;
use crate::payments::{PaymentGateway, StripeGateway};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的单例引用
///
/// 进程启动时构造一次，经 axum `State` 注入到每个处理器；
/// 处理器不读任何全局变量。使用 Arc 实现浅拷贝。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | gateway | Arc<dyn PaymentGateway> | 支付网关 |
/// | notifications | NotificationService | 通知入队端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 支付网关
    pub gateway: Arc<dyn PaymentGateway>,
    /// 通知服务
    pub notifications: NotificationService,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 手动构造服务器状态 (测试注入 mock 网关时使用)
    ///
    /// 生产路径使用 [`initialize()`](Self::initialize)
    pub fn with_parts(
        config: Config,
        db: Surreal<Db>,
        gateway: Arc<dyn PaymentGateway>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            config,
            db,
            gateway,
            notifications,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/dineflow.db)
    /// 3. 支付网关 (Stripe)
    /// 4. 通知服务 (启动后台 worker)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("dineflow.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let gateway: Arc<dyn PaymentGateway> = Arc::new(StripeGateway::new(
            config.stripe_secret_key.clone(),
            config.stripe_api_url.clone(),
            config.payment_return_url.clone(),
        ));
        if config.stripe_secret_key.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY not set, payment processing will fail");
        }

        let notifications = NotificationService::from_config(config);

        Ok(Self::with_parts(
            config.clone(),
            db_service.db,
            gateway,
            notifications,
        ))
    }
}
