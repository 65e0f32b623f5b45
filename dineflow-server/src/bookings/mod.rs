//! 预订域模块
//!
//! 预订/可用性/支付一致性流程：
//!
//! - [`availability`] - 槽位空桌计算 (只读)
//! - [`create`] - 预订创建：校验 → 冲突复查 → 入库
//! - [`payment`] - 押金扣款：状态检查 → 网关 → 状态流转 → 通知入队
//! - [`money`] - 押金金额与最小货币单位换算
//!
//! "每槽位至多一个活跃预订" 由读后写序列尽力维持，存在并发窗口
//! (两个并发请求可能同时通过复查)；未使用唯一索引收紧。

pub mod availability;
pub mod create;
pub mod money;
pub mod payment;

pub use availability::available_tables;
pub use create::{BookingReceipt, create_booking};
pub use payment::{PaymentOutcome, PaymentProcessRequest, process_payment};
