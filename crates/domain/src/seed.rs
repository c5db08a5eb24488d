//! Fixed demo bookings used to populate an empty store.

use crate::booking::Booking;
use crate::id::BookingId;

/// The two demo bookings inserted by the seed operation.
#[must_use]
pub fn demo_bookings() -> Vec<Booking> {
    vec![
        Booking {
            booking_id: BookingId::from("SEED-0001"),
            name: "Abhijeet Vaidya".to_string(),
            email: "mason.davis456@example.com".to_string(),
            checkin_date: "2025-10-26".to_string(),
            checkout_date: "2025-11-02".to_string(),
            room_type: "Suite".to_string(),
            cancelled: false,
            total_paid: 50_000.0,
            rating: 5.0,
            country: "Bali, Indonesia".to_string(),
            price_per_night: 14_940.0,
            ..Booking::default()
        },
        Booking {
            booking_id: BookingId::from("SEED-0002"),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            checkin_date: "2025-12-01".to_string(),
            checkout_date: "2025-12-05".to_string(),
            room_type: "Standard".to_string(),
            cancelled: false,
            total_paid: 30_000.0,
            rating: 4.0,
            country: "London, UK".to_string(),
            price_per_night: 9_130.0,
            ..Booking::default()
        },
    ]
}
