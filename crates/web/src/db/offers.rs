//! Offer repository for database operations.
//!
//! Dates are the primary key, so every write that could collide with an
//! existing date reports `RepositoryError::Conflict` instead of failing the
//! request.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::instrument;

use offer_trend_core::{Offer, Placement};

use super::RepositoryError;

/// Row shape of the `offers` table.
#[derive(sqlx::FromRow)]
struct OfferRow {
    date: NaiveDate,
    placement: Placement,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Self::new(row.date, row.placement)
    }
}

/// Map a unique-key violation to `Conflict`, everything else to `Database`.
fn conflict_or_database(e: sqlx::Error, date: NaiveDate) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("an offer for {date} already exists"));
    }
    RepositoryError::Database(e)
}

/// Repository for offer database operations.
pub struct OfferRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OfferRepository<'a> {
    /// Create a new offer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new offer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an offer already exists for the date.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self), fields(date = %offer.date))]
    pub async fn create(&self, offer: &Offer) -> Result<Offer, RepositoryError> {
        let row = sqlx::query_as::<_, OfferRow>(
            r"
            INSERT INTO offers (date, placement)
            VALUES (?1, ?2)
            RETURNING date, placement
            ",
        )
        .bind(offer.date)
        .bind(offer.placement)
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_or_database(e, offer.date))?;

        Ok(row.into())
    }

    /// List every offer, oldest date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Offer>, RepositoryError> {
        let rows = sqlx::query_as::<_, OfferRow>(
            r"
            SELECT date, placement
            FROM offers
            ORDER BY date ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    /// Get the offer recorded on a date.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get(&self, date: NaiveDate) -> Result<Option<Offer>, RepositoryError> {
        let row = sqlx::query_as::<_, OfferRow>(
            r"
            SELECT date, placement
            FROM offers
            WHERE date = ?1
            ",
        )
        .bind(date)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Offer::from))
    }

    /// Move an offer to a different date, keeping its placement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no offer exists for `old_date`.
    /// Returns `RepositoryError::Conflict` if an offer already exists for `new_date`.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        old_date: NaiveDate,
        new_date: NaiveDate,
    ) -> Result<Offer, RepositoryError> {
        let row = sqlx::query_as::<_, OfferRow>(
            r"
            UPDATE offers
            SET date = ?1
            WHERE date = ?2
            RETURNING date, placement
            ",
        )
        .bind(new_date)
        .bind(old_date)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| conflict_or_database(e, new_date))?;

        row.map(Offer::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete the offer recorded on a date.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no offer exists for the date.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn delete(&self, date: NaiveDate) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM offers
            WHERE date = ?1
            ",
        )
        .bind(date)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
