use std::path::PathBuf;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/dineflow | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CURRENCY | thb | 结算货币 (ISO 4217 小写) |
/// | STRIPE_SECRET_KEY | - | 支付网关密钥 (未设置则扣款失败) |
/// | STRIPE_API_URL | https://api.stripe.com | 支付网关地址 |
/// | PAYMENT_RETURN_URL | https://dineflow.example.com/payment-success | 3DS 跳转地址 |
/// | TWILIO_ACCOUNT_SID | - | SMS 网关账号 |
/// | TWILIO_AUTH_TOKEN | - | SMS 网关令牌 |
/// | TWILIO_PHONE_NUMBER | - | SMS 发送号码 |
/// | SMTP_SERVER | smtp.gmail.com | SMTP 服务器 |
/// | EMAIL_USER | - | 邮件账号 |
/// | EMAIL_PASS | - | 邮件密码 |
/// | ADMIN_EMAIL | - | 店家通知邮箱 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/dineflow HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,

    // === 支付 ===
    /// 结算货币
    pub currency: String,
    /// 支付网关密钥
    pub stripe_secret_key: Option<String>,
    /// 支付网关地址 (测试时可指向 mock)
    pub stripe_api_url: String,
    /// 3DS 跳转地址
    pub payment_return_url: String,

    // === 通知 ===
    /// SMS 网关账号
    pub twilio_account_sid: Option<String>,
    /// SMS 网关令牌
    pub twilio_auth_token: Option<String>,
    /// SMS 发送号码
    pub twilio_phone_number: Option<String>,
    /// SMTP 服务器
    pub smtp_server: String,
    /// 邮件账号
    pub email_user: Option<String>,
    /// 邮件密码
    pub email_pass: Option<String>,
    /// 店家通知邮箱
    pub admin_email: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dineflow".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "thb".into()),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").ok(),
            stripe_api_url: std::env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
            payment_return_url: std::env::var("PAYMENT_RETURN_URL")
                .unwrap_or_else(|_| "https://dineflow.example.com/payment-success".into()),

            twilio_account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok(),
            twilio_auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok(),
            twilio_phone_number: std::env::var("TWILIO_PHONE_NUMBER").ok(),
            smtp_server: std::env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".into()),
            email_user: std::env::var("EMAIL_USER").ok(),
            email_pass: std::env::var("EMAIL_PASS").ok(),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
