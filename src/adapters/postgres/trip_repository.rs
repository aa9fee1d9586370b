//! PostgreSQL implementation of TripRepository.
//!
//! Writes the `trips` row only. Delete clears `shortest_paths` and the trip
//! in a single transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::trip_rows::{db_error, load_trip};
use crate::domain::foundation::{DomainError, ErrorCode, TripId};
use crate::domain::trip::{Trip, TripFields};
use crate::ports::TripRepository;

/// PostgreSQL implementation of TripRepository.
#[derive(Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    /// Creates a new PostgresTripRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let row = sqlx::query(
            r#"
            INSERT INTO trips (name, types, days, con_id, acc_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.trip_type)
        .bind(fields.days_i32())
        .bind(fields.condition_id.map(|id| id.as_i64()))
        .bind(fields.accommodation_id.map(|id| id.as_i64()))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to insert trip"))?;

        let id = TripId::new(row.try_get("id").map_err(db_error("Failed to get id"))?);

        let trip = load_trip(&mut tx, &id).await?.ok_or_else(|| {
            DomainError::database(format!("Inserted trip {} could not be read back", id))
        })?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;

        Ok(trip)
    }

    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Trip, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let result = sqlx::query(
            r#"
            UPDATE trips SET
                name = $2,
                types = $3,
                days = $4,
                con_id = $5,
                acc_id = $6,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&fields.name)
        .bind(&fields.trip_type)
        .bind(fields.days_i32())
        .bind(fields.condition_id.map(|id| id.as_i64()))
        .bind(fields.accommodation_id.map(|id| id.as_i64()))
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to update trip"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", id),
            ));
        }

        let trip = load_trip(&mut tx, id).await?.ok_or_else(|| {
            DomainError::database(format!("Updated trip {} could not be read back", id))
        })?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;

        Ok(trip)
    }

    async fn delete(&self, id: &TripId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        // Dropping `tx` on any early return rolls both steps back.
        sqlx::query("DELETE FROM shortest_paths WHERE trip_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::PathDeleteFailed,
                    format!("Failed to delete paths of trip {}: {}", id, e),
                )
            })?;

        sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::TripDeleteFailed,
                    format!("Failed to delete trip {}: {}", id, e),
                )
            })?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;

        Ok(())
    }
}
