//! Hotel listings and the fixed catalog served for browsing.

use serde::Serialize;

use crate::error::{NotFoundError, StayEaseError};

/// A browsable hotel listing. Prices are nightly, in INR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    pub id: i64,
    pub name: &'static str,
    pub location: &'static str,
    pub price: u32,
    pub room_type: &'static str,
}

const DEMO_HOTELS: [Hotel; 6] = [
    Hotel {
        id: 1,
        name: "The Grand Plaza",
        location: "New York, USA",
        price: 24070,
        room_type: "Suite",
    },
    Hotel {
        id: 2,
        name: "Sunset Bungalow",
        location: "Bali, Indonesia",
        price: 14940,
        room_type: "Deluxe",
    },
    Hotel {
        id: 3,
        name: "The City Lofts",
        location: "London, UK",
        price: 9130,
        room_type: "Standard",
    },
    Hotel {
        id: 4,
        name: "Mountain Retreat",
        location: "Aspen, USA",
        price: 29050,
        room_type: "Family",
    },
    Hotel {
        id: 5,
        name: "Parisian Charm",
        location: "Paris, France",
        price: 18260,
        room_type: "Deluxe",
    },
    Hotel {
        id: 6,
        name: "Tokyo Modern",
        location: "Tokyo, Japan",
        price: 13280,
        room_type: "Standard",
    },
];

/// Immutable, ordered list of hotel listings.
///
/// Built once at startup and shared by reference; there is no way to
/// mutate it after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    hotels: Vec<Hotel>,
}

impl Catalog {
    /// The six demo listings, in display order.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            hotels: DEMO_HOTELS.to_vec(),
        }
    }

    /// All listings in catalog order.
    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Linear scan for the listing with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StayEaseError::NotFound`] when no listing has that id.
    pub fn get(&self, id: i64) -> Result<&Hotel, StayEaseError> {
        self.hotels
            .iter()
            .find(|hotel| hotel.id == id)
            .ok_or_else(|| NotFoundError::Hotel.into())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
