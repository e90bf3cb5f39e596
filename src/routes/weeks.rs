use axum::{Router, routing::get, Json, extract::Path};
use axum::http::StatusCode;
use crate::weeks::{self, WeeklyBabyMetrics};

pub fn routes() -> Router {
    Router::new()
        .route("/weeks", get(get_all_weeks))
        .route("/weeks/:week", get(get_week))
}

async fn get_all_weeks() -> Json<Vec<WeeklyBabyMetrics>> {
    Json(weeks::all().to_vec())
}

async fn get_week(Path(week): Path<i64>) -> Result<Json<WeeklyBabyMetrics>, StatusCode> {
    weeks::metrics_for_week(week)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
