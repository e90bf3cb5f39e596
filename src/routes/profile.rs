use axum::{Router, routing::get, Json, extract::{State, Query}};
use sqlx::PgPool;
use uuid::Uuid;
use chrono::NaiveDate;
use serde::Deserialize;
use crate::models::PregnancyProfile;
use axum::http::StatusCode;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct UpsertProfile {
    pub user_id: Uuid,
    pub name: String,
    pub lmp_date: Option<NaiveDate>,
    pub conception_date: Option<NaiveDate>,
    pub ultrasound_due_date: Option<NaiveDate>,
    pub cycle_length: Option<i32>,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/profile", get(get_profile).post(upsert_profile))
        .with_state(pool)
}

// Stores the raw reference facts only. Due date, current week and the
// rest are derived on every read (see /status), never written back.
async fn upsert_profile(
    State(pool): State<PgPool>,
    Json(body): Json<UpsertProfile>,
) -> Result<StatusCode, (StatusCode, String)> {
    let cycle_length = body.cycle_length.unwrap_or(28);
    if !(20..=45).contains(&cycle_length) {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "cycle_length out of range (expected 20-45)".into()));
    }

    let today = chrono::Utc::now().naive_utc().date();
    if body.lmp_date.map_or(false, |d| d > today) {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "lmp_date is in the future".into()));
    }
    if body.conception_date.map_or(false, |d| d > today) {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "conception_date is in the future".into()));
    }

    sqlx::query(
        "INSERT INTO profiles (user_id, name, lmp_date, conception_date, ultrasound_due_date, cycle_length)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            lmp_date = EXCLUDED.lmp_date,
            conception_date = EXCLUDED.conception_date,
            ultrasound_due_date = EXCLUDED.ultrasound_due_date,
            cycle_length = EXCLUDED.cycle_length,
            updated_at = now()",
    )
    .bind(body.user_id)
    .bind(&body.name)
    .bind(body.lmp_date)
    .bind(body.conception_date)
    .bind(body.ultrasound_due_date)
    .bind(cycle_length)
    .execute(&pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            tracing::error!("❌ DB upsert failed: {}", db_err.message());

            if let Some(code) = db_err.code() {
                tracing::info!("ℹ️ SQLSTATE code: {}", code);
            }

            if let Some(constraint) = db_err.constraint() {
                tracing::info!("🔒 Constraint violated: {}", constraint);
            }
        } else {
            tracing::error!("❌ Unknown DB error: {}", e);
        }

        (StatusCode::UNPROCESSABLE_ENTITY, "DB error".into())
    })?;

    Ok(StatusCode::CREATED)
}

async fn get_profile(
    State(pool): State<PgPool>,
    Query(params): Query<UserQuery>,
) -> Result<Json<PregnancyProfile>, StatusCode> {
    let Some(profile) = sqlx::query_as::<_, PregnancyProfile>(
        "SELECT user_id, name, lmp_date, conception_date, ultrasound_due_date, cycle_length, created_at, updated_at
         FROM profiles WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        eprintln!("❌ DB error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })? else {
        return Err(StatusCode::NOT_FOUND);
    };

    Ok(Json(profile))
}
