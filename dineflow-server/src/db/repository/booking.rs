//! Booking Repository
//!
//! 预订的查询与状态流转。槽位查询只统计 pending/confirmed 状态
//! (cancelled/no-show 释放桌位)。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingStatus, BookingWithRestaurant};

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new booking
    ///
    /// 手动构建 CREATE 语句，避免 restaurantId 被序列化为字符串
    /// (record link 必须以原生形式入库，FETCH 和等值比较才生效)
    pub async fn insert(&self, booking: Booking) -> RepoResult<Booking> {
        let created: Vec<Booking> = self
            .base
            .db()
            .query(
                r#"
                CREATE booking SET
                    restaurantId     = $restaurant,
                    customerName     = $customer_name,
                    customerEmail    = $customer_email,
                    customerPhone    = $customer_phone,
                    bookingDate      = $booking_date,
                    bookingTime      = $booking_time,
                    numGuests        = $num_guests,
                    tableId          = $table_id,
                    depositAmount    = $deposit_amount,
                    paymentStatus    = $payment_status,
                    bookingStatus    = $booking_status,
                    paymentReference = $payment_reference,
                    createdAt        = $created_at
                "#,
            )
            .bind(("restaurant", booking.restaurant_id))
            .bind(("customer_name", booking.customer_name))
            .bind(("customer_email", booking.customer_email))
            .bind(("customer_phone", booking.customer_phone))
            .bind(("booking_date", booking.booking_date))
            .bind(("booking_time", booking.booking_time))
            .bind(("num_guests", booking.num_guests))
            .bind(("table_id", booking.table_id))
            .bind(("deposit_amount", booking.deposit_amount))
            .bind(("payment_status", booking.payment_status))
            .bind(("booking_status", booking.booking_status))
            .bind(("payment_reference", booking.payment_reference))
            .bind(("created_at", booking.created_at))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Find booking by id
    ///
    /// An id that fails to parse cannot reference a record and resolves to
    /// `None`.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let booking: Option<Booking> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// All active bookings for a restaurant/date/time slot
    ///
    /// Active = bookingStatus pending or confirmed; these claim tables.
    pub async fn find_active_for_slot(
        &self,
        restaurant: &RecordId,
        date: &str,
        time: &str,
    ) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE restaurantId = $restaurant \
                   AND bookingDate = $date \
                   AND bookingTime = $time \
                   AND (bookingStatus = 'pending' OR bookingStatus = 'confirmed')",
            )
            .bind(("restaurant", restaurant.clone()))
            .bind(("date", date.to_string()))
            .bind(("time", time.to_string()))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// The active booking occupying one table at a slot, if any
    ///
    /// Same filter as [`find_active_for_slot`](Self::find_active_for_slot),
    /// scoped to a single table. Used for the pre-insert conflict re-check.
    pub async fn find_active_for_table(
        &self,
        restaurant: &RecordId,
        table_id: &str,
        date: &str,
        time: &str,
    ) -> RepoResult<Option<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE restaurantId = $restaurant \
                   AND tableId = $table_id \
                   AND bookingDate = $date \
                   AND bookingTime = $time \
                   AND (bookingStatus = 'pending' OR bookingStatus = 'confirmed') \
                 LIMIT 1",
            )
            .bind(("restaurant", restaurant.clone()))
            .bind(("table_id", table_id.to_string()))
            .bind(("date", date.to_string()))
            .bind(("time", time.to_string()))
            .await?
            .take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// All bookings with their restaurant joined (admin listing)
    pub async fn find_all_with_restaurant(&self) -> RepoResult<Vec<BookingWithRestaurant>> {
        let bookings: Vec<BookingWithRestaurant> = self
            .base
            .db()
            .query("SELECT * FROM booking FETCH restaurantId")
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Record a successful charge: paid + confirmed + gateway reference
    pub async fn mark_paid(
        &self,
        id: &RecordId,
        payment_reference: &str,
    ) -> RepoResult<Option<Booking>> {
        let updated: Vec<Booking> = self
            .base
            .db()
            .query(
                "UPDATE $id SET \
                     paymentStatus = 'paid', \
                     bookingStatus = 'confirmed', \
                     paymentReference = $reference",
            )
            .bind(("id", id.clone()))
            .bind(("reference", payment_reference.to_string()))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Record a declined charge; booking status is left untouched
    pub async fn mark_failed(&self, id: &RecordId) -> RepoResult<Option<Booking>> {
        let updated: Vec<Booking> = self
            .base
            .db()
            .query("UPDATE $id SET paymentStatus = 'failed'")
            .bind(("id", id.clone()))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Overwrite the booking status (staff action, no transition table)
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> RepoResult<Option<Booking>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let updated: Vec<Booking> = self
            .base
            .db()
            .query("UPDATE $id SET bookingStatus = $status")
            .bind(("id", thing))
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }
}
