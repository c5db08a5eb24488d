//! Dashboard view models: per-request projections of [`Booking`] records.
//!
//! Revenue, occupancy and payment methods are fixed demo figures: the source
//! dates are not uniformly parseable, so no real aggregation is attempted.

use serde::Serialize;

use crate::booking::Booking;

/// Revenue shown on the hotel dashboard.
pub const DEMO_REVENUE: Revenue = Revenue {
    this_month_revenue: 1_037_500,
    last_month_revenue: 913_000,
};

/// Guests currently checked in, for the occupancy figure.
pub const DEMO_CURRENT_GUESTS: u32 = 142;

/// Rooms available, for the occupancy figure.
pub const DEMO_TOTAL_ROOMS: u32 = 200;

/// Aggregate returned by the hotel partner dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelDashboard {
    pub recent_bookings: Vec<RecentBooking>,
    pub revenue: Revenue,
    pub occupancy_rate: u32,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentBooking {
    pub name: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub room_type: String,
}

impl From<&Booking> for RecentBooking {
    fn from(booking: &Booking) -> Self {
        Self {
            name: booking.name.clone(),
            checkin_date: booking.checkin_date.clone(),
            checkout_date: booking.checkout_date.clone(),
            room_type: booking.room_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Revenue {
    pub this_month_revenue: u64,
    pub last_month_revenue: u64,
}

/// A payment entry in the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub activity_type: String,
    pub total_paid: f64,
}

impl From<&Booking> for RecentActivity {
    fn from(booking: &Booking) -> Self {
        Self {
            activity_type: format!("Payment from {}", booking.name),
            total_paid: booking.total_paid,
        }
    }
}

/// Percentage of rooms occupied, rounded half up. Zero rooms yields zero.
#[must_use]
pub fn occupancy_rate(current_guests: u32, total_rooms: u32) -> u32 {
    if total_rooms == 0 {
        return 0;
    }
    let guests = u64::from(current_guests);
    let rooms = u64::from(total_rooms);
    let rate = (guests * 200 + rooms) / (rooms * 2);
    u32::try_from(rate).unwrap_or(u32::MAX)
}

/// Aggregate returned by the guest dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDashboard {
    pub personal_info: PersonalInfo,
    pub payment_methods: Vec<PaymentMethod>,
    pub current_trip: Option<CurrentTrip>,
    pub upcoming_trips: Vec<UpcomingTrip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
}

impl PersonalInfo {
    /// Placeholder used when no booking carries the requested name.
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: "N/A".to_string(),
        }
    }
}

impl From<&Booking> for PersonalInfo {
    fn from(booking: &Booking) -> Self {
        Self {
            name: booking.name.clone(),
            email: booking.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub last4: String,
    pub expires: String,
}

impl PaymentMethod {
    /// The single card every guest dashboard shows.
    #[must_use]
    pub fn demo_card() -> Self {
        Self {
            kind: "Credit Card".to_string(),
            last4: "1234".to_string(),
            expires: "08/26".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentTrip {
    pub room_type: String,
    pub price_per_night: f64,
    pub checkin_date: String,
    pub checkout_date: String,
    pub country: String,
}

impl From<&Booking> for CurrentTrip {
    fn from(booking: &Booking) -> Self {
        Self {
            room_type: booking.room_type.clone(),
            price_per_night: booking.price_per_night,
            checkin_date: booking.checkin_date.clone(),
            checkout_date: booking.checkout_date.clone(),
            country: booking.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingTrip {
    pub room_type: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub rating: f64,
}

impl From<&Booking> for UpcomingTrip {
    fn from(booking: &Booking) -> Self {
        Self {
            room_type: booking.room_type.clone(),
            checkin_date: booking.checkin_date.clone(),
            checkout_date: booking.checkout_date.clone(),
            rating: booking.rating,
        }
    }
}
