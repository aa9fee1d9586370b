//! Shared SQL and row mapping for the trip aggregate.
//!
//! Both the reader and the repository load resolved trips through these
//! helpers so that every path returns the same shape.

use std::collections::HashMap;

use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};

use crate::domain::foundation::{
    AccommodationId, ConditionId, DomainError, PathSegmentId, TripId,
};
use crate::domain::trip::{Accommodation, Condition, PathSegment, Trip, TripFields};

const TRIP_SELECT: &str = r#"
    SELECT t.id, t.name, t.types, t.days, t.con_id, t.acc_id,
           t.created_at, t.updated_at,
           c.id AS condition_ref, c.style AS condition_style,
           a.id AS accommodation_ref, a.name AS accommodation_name
    FROM trips t
    LEFT JOIN conditions c ON c.id = t.con_id
    LEFT JOIN accommodations a ON a.id = t.acc_id
"#;

const PATH_SELECT: &str = r#"
    SELECT id, trip_id, day, path_index, from_code, to_code, type, distance,
           activity_description, start_time, end_time
    FROM shortest_paths
    WHERE trip_id = ANY($1)
    ORDER BY trip_id, day, path_index, id
"#;

pub(super) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

/// Loads one resolved trip on the given connection.
pub(super) async fn load_trip(
    conn: &mut PgConnection,
    id: &TripId,
) -> Result<Option<Trip>, DomainError> {
    let query = format!("{} WHERE t.id = $1", TRIP_SELECT);
    let row = sqlx::query(&query)
        .bind(id.as_i64())
        .fetch_optional(&mut *conn)
        .await
        .map_err(db_error("Failed to fetch trip"))?;

    let Some(row) = row else {
        return Ok(None);
    };

    let paths = load_paths(conn, &[id.as_i64()]).await?;
    let mut trips = assemble(vec![row], paths)?;
    Ok(trips.pop())
}

/// Loads every resolved trip on the given connection, ordered by id.
pub(super) async fn load_all_trips(conn: &mut PgConnection) -> Result<Vec<Trip>, DomainError> {
    let query = format!("{} ORDER BY t.id", TRIP_SELECT);
    let rows = sqlx::query(&query)
        .fetch_all(&mut *conn)
        .await
        .map_err(db_error("Failed to fetch trips"))?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids = rows
        .iter()
        .map(|row| row.try_get::<i64, _>("id"))
        .collect::<Result<Vec<_>, _>>()
        .map_err(db_error("Failed to get id"))?;

    let paths = load_paths(conn, &ids).await?;
    assemble(rows, paths)
}

async fn load_paths(
    conn: &mut PgConnection,
    trip_ids: &[i64],
) -> Result<Vec<PathSegment>, DomainError> {
    let rows = sqlx::query(PATH_SELECT)
        .bind(trip_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(db_error("Failed to fetch trip paths"))?;

    rows.into_iter().map(row_to_path_segment).collect()
}

fn assemble(rows: Vec<PgRow>, paths: Vec<PathSegment>) -> Result<Vec<Trip>, DomainError> {
    let mut grouped = group_by_trip(paths);
    rows.into_iter()
        .map(|row| {
            let id: i64 = row.try_get("id").map_err(db_error("Failed to get id"))?;
            let paths = grouped.remove(&id).unwrap_or_default();
            row_to_trip(row, paths)
        })
        .collect()
}

/// Buckets segments by owning trip, preserving their relative order.
pub(super) fn group_by_trip(paths: Vec<PathSegment>) -> HashMap<i64, Vec<PathSegment>> {
    let mut grouped: HashMap<i64, Vec<PathSegment>> = HashMap::new();
    for path in paths {
        grouped.entry(path.trip_id.as_i64()).or_default().push(path);
    }
    grouped
}

fn row_to_trip(row: PgRow, paths: Vec<PathSegment>) -> Result<Trip, DomainError> {
    let id: i64 = row.try_get("id").map_err(db_error("Failed to get id"))?;
    let name: String = row.try_get("name").map_err(db_error("Failed to get name"))?;
    let trip_type: String = row.try_get("types").map_err(db_error("Failed to get types"))?;
    let days: i32 = row.try_get("days").map_err(db_error("Failed to get days"))?;
    let con_id: Option<i64> = row.try_get("con_id").map_err(db_error("Failed to get con_id"))?;
    let acc_id: Option<i64> = row.try_get("acc_id").map_err(db_error("Failed to get acc_id"))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(db_error("Failed to get created_at"))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(db_error("Failed to get updated_at"))?;

    let condition_ref: Option<i64> = row
        .try_get("condition_ref")
        .map_err(db_error("Failed to get condition"))?;
    let condition_style: Option<String> = row
        .try_get("condition_style")
        .map_err(db_error("Failed to get condition style"))?;
    let accommodation_ref: Option<i64> = row
        .try_get("accommodation_ref")
        .map_err(db_error("Failed to get accommodation"))?;
    let accommodation_name: Option<String> = row
        .try_get("accommodation_name")
        .map_err(db_error("Failed to get accommodation name"))?;

    let days = u32::try_from(days)
        .map_err(|_| DomainError::database(format!("Invalid days for trip {}: {}", id, days)))?;

    let fields = TripFields {
        name,
        trip_type,
        days,
        condition_id: con_id.map(ConditionId::new),
        accommodation_id: acc_id.map(AccommodationId::new),
    };

    let condition = condition_ref.map(|cid| Condition {
        id: ConditionId::new(cid),
        style: condition_style.unwrap_or_default(),
    });
    let accommodation = accommodation_ref.map(|aid| Accommodation {
        id: AccommodationId::new(aid),
        name: accommodation_name.unwrap_or_default(),
    });

    Ok(Trip::reconstitute(
        TripId::new(id),
        fields,
        condition,
        accommodation,
        paths,
        created_at,
        updated_at,
    ))
}

fn row_to_path_segment(row: PgRow) -> Result<PathSegment, DomainError> {
    Ok(PathSegment {
        id: PathSegmentId::new(row.try_get("id").map_err(db_error("Failed to get path id"))?),
        trip_id: TripId::new(
            row.try_get("trip_id")
                .map_err(db_error("Failed to get trip_id"))?,
        ),
        day: row.try_get("day").map_err(db_error("Failed to get day"))?,
        path_index: row
            .try_get("path_index")
            .map_err(db_error("Failed to get path_index"))?,
        from_code: row
            .try_get("from_code")
            .map_err(db_error("Failed to get from_code"))?,
        to_code: row
            .try_get("to_code")
            .map_err(db_error("Failed to get to_code"))?,
        kind: row.try_get("type").map_err(db_error("Failed to get type"))?,
        distance: row
            .try_get("distance")
            .map_err(db_error("Failed to get distance"))?,
        activity_description: row
            .try_get("activity_description")
            .map_err(db_error("Failed to get activity_description"))?,
        start_time: row
            .try_get("start_time")
            .map_err(db_error("Failed to get start_time"))?,
        end_time: row
            .try_get("end_time")
            .map_err(db_error("Failed to get end_time"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: i64, trip_id: i64, day: i32, path_index: i32) -> PathSegment {
        PathSegment {
            id: PathSegmentId::new(id),
            trip_id: TripId::new(trip_id),
            day,
            path_index,
            from_code: String::new(),
            to_code: String::new(),
            kind: String::new(),
            distance: 0.0,
            activity_description: String::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    #[test]
    fn group_by_trip_buckets_and_keeps_order() {
        let grouped = group_by_trip(vec![
            segment(1, 10, 1, 1),
            segment(2, 11, 1, 1),
            segment(3, 10, 1, 2),
        ]);

        let ids: Vec<i64> = grouped[&10].iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(grouped[&11].len(), 1);
    }

    #[test]
    fn group_by_trip_of_nothing_is_empty() {
        assert!(group_by_trip(Vec::new()).is_empty());
    }

    #[test]
    fn db_error_prefixes_context() {
        let err = db_error("Failed to fetch trip")(sqlx::Error::RowNotFound);
        assert!(err.message.starts_with("Failed to fetch trip: "));
    }
}
