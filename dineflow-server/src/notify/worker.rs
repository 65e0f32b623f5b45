//! 通知后台 Worker
//!
//! 从 mpsc 通道消费 BookingNotice，依次尝试 SMS/客户邮件/管理员邮件。
//! 三个发送相互隔离，单个失败只记日志。通道关闭时自动退出。

use tokio::sync::mpsc;

use super::{BookingNotice, EmailClient, TwilioClient};

/// 通知后台 Worker
pub struct NotifyWorker {
    sms: Option<TwilioClient>,
    email: Option<EmailClient>,
    admin_email: Option<String>,
}

impl NotifyWorker {
    pub fn new(
        sms: Option<TwilioClient>,
        email: Option<EmailClient>,
        admin_email: Option<String>,
    ) -> Self {
        Self {
            sms,
            email,
            admin_email,
        }
    }

    /// 运行 worker（阻塞直到通道关闭）
    pub async fn run(self, mut rx: mpsc::Receiver<BookingNotice>) {
        tracing::info!("📨 Notification worker started");

        while let Some(notice) = rx.recv().await {
            self.handle(notice).await;
        }

        tracing::info!("Notification channel closed, worker stopping");
    }

    async fn handle(&self, notice: BookingNotice) {
        // 1. SMS to the customer
        match &self.sms {
            Some(sms) if !notice.customer_phone.is_empty() => {
                match sms.send(&notice.customer_phone, &sms_text(&notice)).await {
                    Ok(()) => tracing::info!(
                        booking_id = %notice.booking_id,
                        to = %notice.customer_phone,
                        "Confirmation SMS sent"
                    ),
                    Err(e) => tracing::error!("Error sending SMS: {e}"),
                }
            }
            Some(_) => {}
            None => tracing::warn!("Twilio credentials not set. SMS not sent."),
        }

        // 2. Email to the customer
        let Some(email) = &self.email else {
            tracing::warn!("Email credentials not set. Email not sent.");
            return;
        };

        match email
            .send(
                &notice.customer_email,
                "Your DineFlow booking is confirmed",
                &customer_email_html(&notice),
            )
            .await
        {
            Ok(()) => tracing::info!(
                booking_id = %notice.booking_id,
                to = %notice.customer_email,
                "Confirmation email sent"
            ),
            Err(e) => tracing::error!("Error sending email: {e}"),
        }

        // 3. Email to the restaurant admin
        if let Some(admin) = &self.admin_email {
            let subject = format!("New booking for {}", notice.restaurant_name);
            match email.send(admin, &subject, &admin_email_html(&notice)).await {
                Ok(()) => tracing::info!(
                    booking_id = %notice.booking_id,
                    "Admin notification email sent"
                ),
                Err(e) => tracing::error!("Error sending admin email: {e}"),
            }
        }
    }
}

// ========================================================================
// Message templates
// ========================================================================

fn sms_text(notice: &BookingNotice) -> String {
    format!(
        "Your booking at {} for {} guests on {} at {} is confirmed. Booking ref: {}",
        notice.restaurant_name,
        notice.num_guests,
        notice.booking_date,
        notice.booking_time,
        notice.booking_id,
    )
}

fn customer_email_html(notice: &BookingNotice) -> String {
    format!(
        "<p><strong>Your booking is confirmed!</strong></p>\
         <p><strong>Restaurant:</strong> {}</p>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Time:</strong> {}</p>\
         <p><strong>Guests:</strong> {}</p>\
         <p><strong>Table:</strong> {}</p>\
         <p><strong>Deposit paid:</strong> {:.2}</p>\
         <p><strong>Booking ref:</strong> {}</p>\
         <p>Thank you for booking with DineFlow.</p>",
        notice.restaurant_name,
        notice.booking_date,
        notice.booking_time,
        notice.num_guests,
        notice.table_id,
        notice.deposit_amount,
        notice.booking_id,
    )
}

fn admin_email_html(notice: &BookingNotice) -> String {
    format!(
        "<p>A new booking has come in for {}</p>\
         <p><strong>Customer:</strong> {} ({}, {})</p>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Time:</strong> {}</p>\
         <p><strong>Guests:</strong> {}</p>\
         <p><strong>Table:</strong> {}</p>\
         <p><strong>Deposit:</strong> {:.2} (paid)</p>\
         <p><strong>Booking ref:</strong> {}</p>",
        notice.restaurant_name,
        notice.customer_name,
        notice.customer_email,
        notice.customer_phone,
        notice.booking_date,
        notice.booking_time,
        notice.num_guests,
        notice.table_id,
        notice.deposit_amount,
        notice.booking_id,
    )
}
