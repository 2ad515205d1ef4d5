use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{BloodPressureReading, HeartRateReading, Patient};

pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a patient by id
    pub async fn get_patient(&self, id: i32) -> Result<Option<Patient>> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT id, first_name, last_name, date_of_birth FROM patient WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patient)
    }

    /// All patients, ordered by id for stable output
    pub async fn list_patients(&self) -> Result<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT id, first_name, last_name, date_of_birth FROM patient ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    /// Every stored heart-rate reading, oldest first
    pub async fn list_heart_rates(&self) -> Result<Vec<HeartRateReading>> {
        let readings = sqlx::query_as::<_, HeartRateReading>(
            "SELECT id, patient_id, rate, date FROM heart_rate ORDER BY date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    /// Every stored blood-pressure reading, oldest first
    pub async fn list_blood_pressures(&self) -> Result<Vec<BloodPressureReading>> {
        let readings = sqlx::query_as::<_, BloodPressureReading>(
            "SELECT id, patient_id, systolic, diastolic, date FROM blood_pressure ORDER BY date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    /// The patient's most recent heart-rate reading, if any
    pub async fn latest_heart_rate(&self, patient_id: i32) -> Result<Option<HeartRateReading>> {
        let reading = sqlx::query_as::<_, HeartRateReading>(
            "SELECT id, patient_id, rate, date FROM heart_rate
             WHERE patient_id = $1
             ORDER BY date DESC
             LIMIT 1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reading)
    }

    /// The patient's most recent blood-pressure reading, if any
    pub async fn latest_blood_pressure(
        &self,
        patient_id: i32,
    ) -> Result<Option<BloodPressureReading>> {
        let reading = sqlx::query_as::<_, BloodPressureReading>(
            "SELECT id, patient_id, systolic, diastolic, date FROM blood_pressure
             WHERE patient_id = $1
             ORDER BY date DESC
             LIMIT 1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reading)
    }
}
