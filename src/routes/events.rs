use axum::{
    Router,
    routing::{get, post, delete},
    extract::{State, Query},
    Json,
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use std::collections::BTreeMap;
use crate::models::{ Event, EventsByDate, DeleteEventRequest };

#[derive(Deserialize)]
pub struct NewEvent {
    pub user_id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_type: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub reminder: Option<bool>,
}

#[derive(Deserialize)]
struct EventsQuery {
    user_id: Uuid,
    // optional range bounds; the dashboard asks for today..today+7
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct UserQuery {
    user_id: Uuid,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/event", post(create_event))
        .route("/event", delete(delete_event))
        .route("/events", get(get_events))
        .route("/events/by-date", get(get_events_grouped))
        .with_state(pool)
}

async fn create_event(
    State(pool): State<PgPool>,
    Json(body): Json<NewEvent>,
) -> Result<StatusCode, StatusCode> {
    sqlx::query(
        "INSERT INTO events (user_id, title, event_date, event_type, description, location, reminder)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(body.user_id)
    .bind(&body.title)
    .bind(body.event_date)
    .bind(&body.event_type)
    .bind(&body.description)
    .bind(&body.location)
    .bind(body.reminder.unwrap_or(false))
    .execute(&pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            tracing::error!("❌ DB insert failed: {}", db_err.message());

            if let Some(code) = db_err.code() {
                tracing::info!("ℹ️ SQLSTATE code: {}", code);
            }

            if let Some(constraint) = db_err.constraint() {
                tracing::info!("🔒 Constraint violated: {}", constraint);
            }
        } else {
            tracing::error!("❌ Unknown DB error: {}", e);
        }

        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    Ok(StatusCode::CREATED)
}

async fn delete_event(
    State(pool): State<PgPool>,
    Json(payload): Json<DeleteEventRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let event_id = match Uuid::parse_str(&payload.event_id) {
        Ok(uuid) => uuid,
        Err(_) => return Err((StatusCode::BAD_REQUEST, "Invalid event_id UUID".into())),
    };

    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(event_id)
        .execute(&pool)
        .await;

    match result {
        Ok(r) if r.rows_affected() > 0 => Ok(StatusCode::NO_CONTENT),
        Ok(_) => Err((StatusCode::NOT_FOUND, "No event found".into())),
        Err(e) => {
            eprintln!("❌ DB error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "DB error".into()))
        }
    }
}

async fn get_events(
    State(pool): State<PgPool>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, StatusCode> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT id, user_id, title, event_date, event_type, description, location, reminder, created_at
         FROM events
         WHERE user_id = $1
           AND ($2::date IS NULL OR event_date >= $2)
           AND ($3::date IS NULL OR event_date <= $3)
         ORDER BY event_date ASC",
    )
    .bind(query.user_id)
    .bind(query.from)
    .bind(query.to)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("❌ Failed to fetch events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(events))
}

async fn get_events_grouped(
    State(pool): State<PgPool>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<EventsByDate>>, StatusCode> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT id, user_id, title, event_date, event_type, description, location, reminder, created_at
         FROM events
         WHERE user_id = $1
         ORDER BY event_date ASC",
    )
    .bind(query.user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        eprintln!("❌ Failed to fetch events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(group_by_date(events)))
}

fn group_by_date(events: Vec<Event>) -> Vec<EventsByDate> {
    let mut map = BTreeMap::<NaiveDate, Vec<Event>>::new();
    for event in events {
        map.entry(event.event_date)
            .or_default()
            .push(event);
    }

    map.into_iter()
        .map(|(event_date, events)| EventsByDate { event_date, events })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(day: u32, title: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            event_type: "appointment".to_string(),
            description: None,
            location: None,
            reminder: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_date_merges_same_day() {
        let grouped = group_by_date(vec![
            event(3, "midwife"),
            event(1, "scan"),
            event(3, "yoga"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].event_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(grouped[0].events.len(), 1);
        assert_eq!(grouped[1].events.len(), 2);
        assert_eq!(grouped[1].events[0].title, "midwife");
    }

    #[test]
    fn test_group_by_date_empty() {
        assert!(group_by_date(vec![]).is_empty());
    }
}
