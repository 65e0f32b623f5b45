//! 通知模块
//!
//! 支付成功后的客户/店家通知。请求路径只负责入队
//! ([`NotificationService::enqueue`])，发送由后台 worker 完成：
//! - SMS 给客户 (Twilio，未配置则跳过)
//! - 邮件给客户
//! - 邮件给管理员
//!
//! 每个发送相互独立，失败只记日志，不重试、不回滚预订。

pub mod email;
pub mod sms;
pub mod worker;

pub use email::EmailClient;
pub use sms::TwilioClient;

use tokio::sync::mpsc;

use crate::core::Config;
use worker::NotifyWorker;

/// 通知队列容量 — 队列满时丢弃并记日志 (通知尽力而为)
const NOTIFY_BUFFER: usize = 64;

/// A booking-confirmed notice, carrying everything the messages need
#[derive(Debug, Clone)]
pub struct BookingNotice {
    pub booking_id: String,
    pub restaurant_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub num_guests: i32,
    pub table_id: String,
    pub deposit_amount: f64,
}

/// 通知服务 — 持有入队端，worker 在后台消费
#[derive(Clone)]
pub struct NotificationService {
    tx: mpsc::Sender<BookingNotice>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Start the worker task and return the enqueue handle
    pub fn start(
        sms: Option<TwilioClient>,
        email: Option<EmailClient>,
        admin_email: Option<String>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(NOTIFY_BUFFER);
        let worker = NotifyWorker::new(sms, email, admin_email);
        tokio::spawn(worker.run(rx));
        Self { tx }
    }

    /// Build transports from configuration and start the worker
    pub fn from_config(config: &Config) -> Self {
        let sms = TwilioClient::from_config(
            config.twilio_account_sid.as_deref(),
            config.twilio_auth_token.as_deref(),
            config.twilio_phone_number.as_deref(),
        );
        let email = EmailClient::from_config(
            &config.smtp_server,
            config.email_user.as_deref(),
            config.email_pass.as_deref(),
        );
        Self::start(sms, email, config.admin_email.clone())
    }

    /// Enqueue a notice without waiting for delivery
    ///
    /// 队列满或已关闭时丢弃 — 发送结果从不反馈给调用方
    pub fn enqueue(&self, notice: BookingNotice) {
        if let Err(e) = self.tx.try_send(notice) {
            tracing::error!("Notification queue unavailable, notice dropped: {e}");
        }
    }
}
