//! `SQLite` implementation of [`BookingRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayease_app::ports::{BookingRepository, RecentKind, SeedOutcome};
use stayease_domain::booking::Booking;
use stayease_domain::error::StayEaseError;
use stayease_domain::id::BookingId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Booking`].
///
/// Columns written by hand-made setup scripts may be `NULL`; those decode to
/// the field's default.
struct Wrapper(Booking);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Booking> {
        value.map(|w| w.0)
    }
}

fn text(row: &SqliteRow, column: &str) -> Result<String, sqlx::Error> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

fn integer(row: &SqliteRow, column: &str) -> Result<i64, sqlx::Error> {
    Ok(row.try_get::<Option<i64>, _>(column)?.unwrap_or_default())
}

fn real(row: &SqliteRow, column: &str) -> Result<f64, sqlx::Error> {
    Ok(row.try_get::<Option<f64>, _>(column)?.unwrap_or_default())
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let booking_id: String = row.try_get("booking_id")?;

        Ok(Self(Booking {
            booking_id: BookingId::new(booking_id),
            name: text(row, "name")?,
            age: integer(row, "age")?,
            gender: text(row, "gender")?,
            country: text(row, "country")?,
            email: text(row, "email")?,
            phone: text(row, "phone")?,
            booking_date: text(row, "booking_date")?,
            checkin_date: text(row, "checkin_date")?,
            checkout_date: text(row, "checkout_date")?,
            days_stayed: integer(row, "days_stayed")?,
            number_of_guests: integer(row, "number_of_guests")?,
            room_type: text(row, "room_type")?,
            price_per_night: real(row, "price_per_night")?,
            promo_code: text(row, "promo_code")?,
            discount_pct: real(row, "discount_pct")?,
            subtotal: real(row, "subtotal")?,
            total_paid: real(row, "total_paid")?,
            payment_method: text(row, "payment_method")?,
            booking_channel: text(row, "booking_channel")?,
            special_requests: text(row, "special_requests")?,
            repeat_guest: integer(row, "repeat_guest")? != 0,
            cancelled: integer(row, "cancelled")? != 0,
            rating: real(row, "rating")?,
            review: text(row, "review")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO bookings (
        booking_id, name, age, gender, country, email, phone,
        booking_date, checkin_date, checkout_date, days_stayed,
        number_of_guests, room_type, price_per_night, promo_code,
        discount_pct, subtotal, total_paid, payment_method,
        booking_channel, special_requests, repeat_guest, cancelled,
        rating, review
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_EMAIL: &str = "SELECT * FROM bookings WHERE TRIM(email) = ? LIMIT 1";
const SELECT_BY_NAME: &str = "SELECT * FROM bookings WHERE name = ? LIMIT 1";
const SELECT_ACTIVE_BY_NAME: &str = "SELECT * FROM bookings WHERE name = ? AND cancelled = 0";
const SELECT_RECENT: &str =
    "SELECT * FROM bookings WHERE cancelled = 0 ORDER BY booking_id DESC LIMIT ?";
const SELECT_RECENT_PAID: &str = "SELECT * FROM bookings WHERE cancelled = 0 AND total_paid > 0 ORDER BY booking_id DESC LIMIT ?";
const SELECT_ANY: &str = "SELECT EXISTS (SELECT 1 FROM bookings)";
const COUNT: &str = "SELECT COUNT(*) FROM bookings";

/// `SQLite`-backed booking repository.
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert every booking in one transaction.
    ///
    /// Nothing is written if any insert fails (e.g. a duplicate id).
    ///
    /// # Errors
    ///
    /// Returns a storage error from the failing statement.
    pub async fn insert_all(&self, bookings: &[Booking]) -> Result<usize, StayEaseError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        for booking in bookings {
            sqlx::query(INSERT)
                .bind(booking.booking_id.as_str())
                .bind(&booking.name)
                .bind(booking.age)
                .bind(&booking.gender)
                .bind(&booking.country)
                .bind(&booking.email)
                .bind(&booking.phone)
                .bind(&booking.booking_date)
                .bind(&booking.checkin_date)
                .bind(&booking.checkout_date)
                .bind(booking.days_stayed)
                .bind(booking.number_of_guests)
                .bind(&booking.room_type)
                .bind(booking.price_per_night)
                .bind(&booking.promo_code)
                .bind(booking.discount_pct)
                .bind(booking.subtotal)
                .bind(booking.total_paid)
                .bind(&booking.payment_method)
                .bind(&booking.booking_channel)
                .bind(&booking.special_requests)
                .bind(i64::from(booking.repeat_guest))
                .bind(i64::from(booking.cancelled))
                .bind(booking.rating)
                .bind(&booking.review)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;
        tracing::debug!(count = bookings.len(), "inserted bookings");
        Ok(bookings.len())
    }

    /// Number of stored bookings, cancelled ones included.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn count(&self) -> Result<u64, StayEaseError> {
        let (count,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

impl BookingRepository for SqliteBookingRepository {
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Booking>, StayEaseError>> + Send {
        let pool = self.pool.clone();
        let email = email.trim().to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Booking>, StayEaseError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_recent(
        &self,
        limit: usize,
        kind: RecentKind,
    ) -> impl Future<Output = Result<Vec<Booking>, StayEaseError>> + Send {
        let pool = self.pool.clone();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let sql = match kind {
            RecentKind::All => SELECT_RECENT,
            RecentKind::Paid => SELECT_RECENT_PAID,
        };
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(sql)
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn list_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Booking>, StayEaseError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE_BY_NAME)
                .bind(name)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    async fn seed_if_empty(&self, bookings: Vec<Booking>) -> Result<SeedOutcome, StayEaseError> {
        let (populated,): (i64,) = sqlx::query_as(SELECT_ANY)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if populated != 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let count = self.insert_all(&bookings).await?;
        Ok(SeedOutcome::Seeded(count))
    }
}
