//! Database Models

// Serde helpers
pub mod serde_helpers;

// Directory
pub mod restaurant;

// Bookings
pub mod booking;

// Re-exports
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantTable};
pub use booking::{
    Booking, BookingCreate, BookingStatus, BookingWithRestaurant, PaymentStatus,
};
