use axum::{
    Router,
    routing::{get, post},
    extract::{State, Query},
    Json,
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use crate::models::Note;

#[derive(Deserialize)]
pub struct NewNote {
    pub user_id: Uuid,
    pub note_date: NaiveDate,
    pub content: String,
    pub mood: Option<String>,
}

#[derive(Deserialize)]
struct NoteQuery {
    user_id: Uuid,
    note_date: NaiveDate,
}

#[derive(Deserialize)]
struct UserQuery {
    user_id: Uuid,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/note", post(upsert_note))       // one journal note per day
        .route("/note", get(get_note))
        .route("/notes", get(get_notes))
        .with_state(pool)
}

async fn upsert_note(
    State(pool): State<PgPool>,
    Json(body): Json<NewNote>,
) -> Result<StatusCode, StatusCode> {
    sqlx::query(
        "INSERT INTO notes (user_id, note_date, content, mood)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (user_id, note_date) DO UPDATE SET
            content = EXCLUDED.content,
            mood = EXCLUDED.mood,
            updated_at = now()",
    )
    .bind(body.user_id)
    .bind(body.note_date)
    .bind(&body.content)
    .bind(&body.mood)
    .execute(&pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            tracing::error!("❌ DB upsert failed: {}", db_err.message());
        } else {
            tracing::error!("❌ Unknown DB error: {}", e);
        }

        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    Ok(StatusCode::CREATED)
}

async fn get_note(
    State(pool): State<PgPool>,
    Query(query): Query<NoteQuery>,
) -> Result<Json<Note>, StatusCode> {
    let Some(note) = sqlx::query_as::<_, Note>(
        "SELECT id, user_id, note_date, content, mood, created_at, updated_at
         FROM notes WHERE user_id = $1 AND note_date = $2",
    )
    .bind(query.user_id)
    .bind(query.note_date)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        eprintln!("❌ DB error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })? else {
        return Err(StatusCode::NOT_FOUND);
    };

    Ok(Json(note))
}

async fn get_notes(
    State(pool): State<PgPool>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Note>>, StatusCode> {
    let notes = sqlx::query_as::<_, Note>(
        "SELECT id, user_id, note_date, content, mood, created_at, updated_at
         FROM notes
         WHERE user_id = $1
         ORDER BY note_date DESC",
    )
    .bind(query.user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("❌ Failed to fetch notes: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(notes))
}
