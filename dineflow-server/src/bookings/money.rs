//! Deposit arithmetic
//!
//! 金额计算走 rust_decimal，避免二进制浮点在 ×100 换算时的偏差。

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// depositPerPerson × numGuests, rounded to 2 decimal places
pub fn deposit_for(deposit_per_person: f64, num_guests: i32) -> f64 {
    let per_person = Decimal::from_f64(deposit_per_person).unwrap_or_default();
    (per_person * Decimal::from(num_guests))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Expected charge in minor currency units (satang / cents): round(amount × 100)
pub fn to_minor_units(amount: f64) -> i64 {
    let amount = Decimal::from_f64(amount).unwrap_or_default();
    (amount * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
