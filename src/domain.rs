use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row from the `patient` table.
#[derive(Debug, Clone, FromRow)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
}

/// Row from the `heart_rate` table. `rate` is beats per minute.
#[derive(Debug, Clone, FromRow)]
pub struct HeartRateReading {
    pub id: i32,
    pub patient_id: i32,
    pub rate: i32,
    pub date: DateTime<Utc>,
}

/// Row from the `blood_pressure` table. Pressures are in mmHg.
#[derive(Debug, Clone, FromRow)]
pub struct BloodPressureReading {
    pub id: i32,
    pub patient_id: i32,
    pub systolic: f64,
    pub diastolic: f64,
    pub date: DateTime<Utc>,
}
