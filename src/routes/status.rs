use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::engine;
use crate::models::{PregnancyProfile, PregnancyStatus};
use crate::weeks;

#[derive(Deserialize)]
pub struct StatusQuery {
    user_id: Uuid,
    // defaults to today when absent
    as_of: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct TimelineWeek {
    week: i64,
    title: String,
    size_comparison: String,
    height_cm: f64,
    weight_grams: f64,
    is_current_week: bool,
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/timeline", get(get_timeline))
        .with_state(pool)
}

// Dashboard payload. A profile with no reference dates yields nulls in a
// 200 body; 404 means no profile row at all.
async fn get_status(
    State(pool): State<PgPool>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<PregnancyStatus>, StatusCode> {
    let profile = fetch_profile(&pool, params.user_id).await?;

    let as_of = params
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().naive_utc().date());

    let dates = profile.reference_dates();
    let status = engine::derive_status(&dates, as_of);

    let estimated_conception = dates.conception.or_else(|| {
        dates
            .lmp
            .map(|lmp| engine::estimate_conception(lmp, dates.cycle_length))
    });

    // Unclamped week here: the dashboard shows the raw count, the
    // timeline below is what clamps.
    let (baby_size, tip) = match &status {
        Some(s) => (
            Some(
                weeks::metrics_for_week(s.current_week)
                    .map(|m| m.size_comparison.to_string())
                    .unwrap_or_else(|| "a little miracle".to_string()),
            ),
            Some(weeks::tip_for_week(s.current_week).to_string()),
        ),
        None => (None, None),
    };

    Ok(Json(PregnancyStatus {
        user_id: profile.user_id,
        as_of,
        due_date: status.map(|s| s.due_date),
        current_week: status.map(|s| s.current_week),
        current_day: status.map(|s| s.current_day),
        days_remaining: status.map(|s| s.days_remaining),
        trimester: status.map(|s| s.trimester),
        estimated_conception,
        baby_size,
        tip,
    }))
}

async fn get_timeline(
    State(pool): State<PgPool>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<TimelineWeek>>, StatusCode> {
    let profile = fetch_profile(&pool, params.user_id).await?;

    let as_of = params
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().naive_utc().date());

    // Timeline highlight stays within 1-42 even when the raw week runs past
    let current = engine::derive_status(&profile.reference_dates(), as_of)
        .map(|s| engine::clamp_week(s.current_week));

    let timeline = weeks::all()
        .iter()
        .map(|m| TimelineWeek {
            week: m.week,
            title: weeks::title_for_week(m.week),
            size_comparison: m.size_comparison.to_string(),
            height_cm: m.height_cm,
            weight_grams: m.weight_grams,
            is_current_week: current == Some(m.week),
        })
        .collect();

    Ok(Json(timeline))
}

async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<PregnancyProfile, StatusCode> {
    let Some(profile) = sqlx::query_as::<_, PregnancyProfile>(
        "SELECT user_id, name, lmp_date, conception_date, ultrasound_due_date, cycle_length, created_at, updated_at
         FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("❌ DB error in fetch_profile: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })? else {
        return Err(StatusCode::NOT_FOUND);
    };

    Ok(profile)
}
