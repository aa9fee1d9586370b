//! PostgreSQL implementation of TripReader.
//!
//! Each load runs inside a read-only `REPEATABLE READ` transaction so the
//! trip row, its references and its paths come from one snapshot.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::trip_rows::{db_error, load_all_trips, load_trip};
use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::Trip;
use crate::ports::TripReader;

/// PostgreSQL implementation of TripReader.
#[derive(Clone)]
pub struct PostgresTripReader {
    pool: PgPool,
}

impl PostgresTripReader {
    /// Creates a new PostgresTripReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn snapshot(&self) -> Result<Transaction<'static, Postgres>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to set snapshot isolation"))?;

        Ok(tx)
    }
}

#[async_trait]
impl TripReader for PostgresTripReader {
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let mut tx = self.snapshot().await?;
        let trip = load_trip(&mut tx, id).await?;
        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(trip)
    }

    async fn list_all(&self) -> Result<Vec<Trip>, DomainError> {
        let mut tx = self.snapshot().await?;
        let trips = load_all_trips(&mut tx).await?;
        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(trips)
    }
}
