//! Booking service: login checks, dashboards and demo seeding.

use stayease_domain::booking::{self, Booking};
use stayease_domain::dashboard::{
    self, CurrentTrip, HotelDashboard, PaymentMethod, PersonalInfo, RecentActivity, RecentBooking,
    UpcomingTrip, UserDashboard,
};
use stayease_domain::error::{NotFoundError, StayEaseError, ValidationError};
use stayease_domain::seed;

use crate::ports::{BookingRepository, RecentKind, SeedOutcome};

/// Bookings listed on the hotel dashboard.
const RECENT_BOOKINGS_LIMIT: usize = 5;

/// Payments listed in the hotel dashboard activity feed.
const RECENT_ACTIVITY_LIMIT: usize = 4;

/// Application service over the booking store.
pub struct BookingService<R> {
    repo: R,
}

impl<R: BookingRepository> BookingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Confirm a guest email exists and return the guest's name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEmail`] for a blank email,
    /// [`NotFoundError::Guest`] when no booking carries it, or a storage error.
    pub async fn login(&self, email: &str) -> Result<String, StayEaseError> {
        let email = required_email(email)?;
        let found = self.repo.find_by_email(email).await?;
        found
            .map(|booking| booking.name)
            .ok_or_else(|| NotFoundError::Guest.into())
    }

    /// Simulated partner login.
    ///
    /// Partners are not a separate identity: any email present in the
    /// bookings dataset is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEmail`] for a blank email,
    /// [`NotFoundError::HotelAccount`] when no booking carries it, or a storage error.
    pub async fn hotel_login(&self, email: &str) -> Result<(), StayEaseError> {
        let email = required_email(email)?;
        match self.repo.find_by_email(email).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::HotelAccount.into()),
        }
    }

    /// Build the hotel partner dashboard.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn hotel_dashboard(&self) -> Result<HotelDashboard, StayEaseError> {
        let recent = self
            .repo
            .list_recent(RECENT_BOOKINGS_LIMIT, RecentKind::All)
            .await?;
        let payments = self
            .repo
            .list_recent(RECENT_ACTIVITY_LIMIT, RecentKind::Paid)
            .await?;

        Ok(HotelDashboard {
            recent_bookings: recent.iter().map(RecentBooking::from).collect(),
            revenue: dashboard::DEMO_REVENUE,
            occupancy_rate: dashboard::occupancy_rate(
                dashboard::DEMO_CURRENT_GUESTS,
                dashboard::DEMO_TOTAL_ROOMS,
            ),
            recent_activity: payments.iter().map(RecentActivity::from).collect(),
        })
    }

    /// Build the dashboard for the guest called `user_name`.
    ///
    /// Active bookings are sorted by check-in string, latest first; the first
    /// one is the current trip and the rest are upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUserName`] for an empty name, or a
    /// storage error propagated from the repository.
    pub async fn user_dashboard(&self, user_name: &str) -> Result<UserDashboard, StayEaseError> {
        if user_name.is_empty() {
            return Err(ValidationError::MissingUserName.into());
        }

        let mut trips = self.repo.list_by_name(user_name).await?;
        booking::sort_by_checkin_desc(&mut trips);

        let personal_info = self
            .repo
            .find_by_name(user_name)
            .await?
            .map_or_else(|| PersonalInfo::unknown(user_name), |b| PersonalInfo::from(&b));

        let mut trips = trips.iter();
        let current_trip = trips.next().map(CurrentTrip::from);
        let upcoming_trips = trips.map(UpcomingTrip::from).collect();

        Ok(UserDashboard {
            personal_info,
            payment_methods: vec![PaymentMethod::demo_card()],
            current_trip,
            upcoming_trips,
        })
    }

    /// Insert the demo bookings unless the store already has data.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn seed_demo_data(&self) -> Result<SeedOutcome, StayEaseError> {
        self.seed(seed::demo_bookings()).await
    }

    /// Insert `bookings` unless the store already has data.
    ///
    /// # Errors
    ///
    /// Returns [`StayEaseError::Validation`] if any booking fails its
    /// invariants, or a storage error propagated from the repository.
    pub async fn seed(&self, bookings: Vec<Booking>) -> Result<SeedOutcome, StayEaseError> {
        for booking in &bookings {
            booking.validate()?;
        }
        let outcome = self.repo.seed_if_empty(bookings).await?;
        match outcome {
            SeedOutcome::Seeded(count) => tracing::info!(count, "seeded booking store"),
            SeedOutcome::AlreadyPopulated => {
                tracing::debug!("booking store already populated, seed skipped");
            }
        }
        Ok(outcome)
    }
}

fn required_email(email: &str) -> Result<&str, StayEaseError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail.into());
    }
    Ok(email)
}
