use serde::{ Serialize, Deserialize };
use uuid::Uuid;
use chrono::{NaiveDate, DateTime, Utc};

use crate::engine::ReferenceDates;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PregnancyProfile {
    pub user_id: Uuid,
    pub name: String,
    pub lmp_date: Option<NaiveDate>,
    pub conception_date: Option<NaiveDate>,
    pub ultrasound_due_date: Option<NaiveDate>,
    pub cycle_length: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PregnancyProfile {
    pub fn reference_dates(&self) -> ReferenceDates {
        ReferenceDates {
            lmp: self.lmp_date,
            conception: self.conception_date,
            ultrasound_due_date: self.ultrasound_due_date,
            cycle_length: self.cycle_length as i64,
        }
    }
}

#[derive(Serialize)]
pub struct PregnancyStatus {
    pub user_id: Uuid,
    pub as_of: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub current_week: Option<i64>,
    pub current_day: Option<i64>,
    pub days_remaining: Option<i64>,
    pub trimester: Option<i64>,
    pub estimated_conception: Option<NaiveDate>,
    pub baby_size: Option<String>,
    pub tip: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_type: String, // appointment, milestone, custom
    pub description: Option<String>,
    pub location: Option<String>,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct EventsByDate {
    pub event_date: NaiveDate,
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteEventRequest {
    pub event_id: String, // or uuid::Uuid
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub note_date: NaiveDate,
    pub content: String,
    pub mood: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
