//! Shared application state for axum handlers.

use std::sync::Arc;

use stayease_app::ports::BookingRepository;
use stayease_app::services::booking_service::BookingService;
use stayease_domain::hotel::Catalog;

/// Application state shared across all axum handlers.
///
/// Generic over the booking repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Login, dashboard and seeding service.
    pub booking_service: Arc<BookingService<R>>,
    /// Fixed hotel listings.
    pub catalog: Arc<Catalog>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            booking_service: Arc::clone(&self.booking_service),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<R> AppState<R>
where
    R: BookingRepository + Send + Sync + 'static,
{
    /// Create a new application state.
    pub fn new(booking_service: BookingService<R>, catalog: Catalog) -> Self {
        Self {
            booking_service: Arc::new(booking_service),
            catalog: Arc::new(catalog),
        }
    }
}
