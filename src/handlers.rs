use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use std::sync::Arc;

use crate::bundle;
use crate::db::Database;
use crate::error::FhirError;
use crate::mapper;
use crate::models::{BundleResource, Resource};

fn fhir_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Content-Type",
        axum::http::HeaderValue::from_static("application/fhir+json"),
    );
    headers
}

/// GET /fhir/Patient — every patient, as a searchset Bundle
pub async fn list_patients(
    State(db): State<Arc<Database>>,
) -> Result<(StatusCode, HeaderMap, Json<Resource>), FhirError> {
    let patients = db
        .list_patients()
        .await
        .map_err(|e| FhirError::internal(format!("Failed to list patients: {}", e)))?;

    if patients.is_empty() {
        return Err(FhirError::not_found("No patients found", "Patient"));
    }

    let bundle = bundle::searchset(&patients, "Patient", |p| p.id, |p| {
        mapper::patient_to_fhir(p).into()
    });

    Ok((StatusCode::OK, fhir_headers(), Json(bundle.into())))
}

/// GET /fhir/Patient/:id — one patient resource
pub async fn get_patient(
    State(db): State<Arc<Database>>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, HeaderMap, Json<Resource>), FhirError> {
    let patient = db
        .get_patient(id)
        .await
        .map_err(|e| FhirError::internal(format!("Failed to retrieve patient: {}", e)))?
        .ok_or_else(|| {
            FhirError::not_found(
                format!("Patient with id {} not found", id),
                format!("Patient/{}", id),
            )
        })?;

    Ok((
        StatusCode::OK,
        fhir_headers(),
        Json(mapper::patient_to_fhir(&patient).into()),
    ))
}

/// GET /fhir/Observation — every heart-rate and blood-pressure reading in
/// one searchset Bundle, heart rates first. A kind with zero rows simply
/// contributes no entries; 404 only when both kinds are empty.
pub async fn list_observations(
    State(db): State<Arc<Database>>,
) -> Result<(StatusCode, HeaderMap, Json<Resource>), FhirError> {
    let heart_rates = db
        .list_heart_rates()
        .await
        .map_err(|e| FhirError::internal(format!("Failed to list heart rates: {}", e)))?;
    let blood_pressures = db
        .list_blood_pressures()
        .await
        .map_err(|e| FhirError::internal(format!("Failed to list blood pressures: {}", e)))?;

    if heart_rates.is_empty() && blood_pressures.is_empty() {
        return Err(FhirError::not_found("No observations found", "Observation"));
    }

    let mut entries = bundle::entries(&heart_rates, "Observation", |r| r.id, |r| {
        mapper::heart_rate_to_observation(r).into()
    });
    entries.extend(bundle::entries(&blood_pressures, "Observation", |r| r.id, |r| {
        mapper::blood_pressure_to_observation(r).into()
    }));

    Ok((
        StatusCode::OK,
        fhir_headers(),
        Json(BundleResource::searchset(entries).into()),
    ))
}

/// GET /fhir/Observation/heart_rate/:patient_id — the patient's most
/// recent heart-rate reading as an Observation
pub async fn get_heart_rate(
    State(db): State<Arc<Database>>,
    Path(patient_id): Path<i32>,
) -> Result<(StatusCode, HeaderMap, Json<Resource>), FhirError> {
    let reading = db
        .latest_heart_rate(patient_id)
        .await
        .map_err(|e| FhirError::internal(format!("Failed to retrieve heart rate: {}", e)))?
        .ok_or_else(|| {
            FhirError::not_found(
                format!("No heart rate reading for patient {}", patient_id),
                format!("Patient/{}", patient_id),
            )
        })?;

    Ok((
        StatusCode::OK,
        fhir_headers(),
        Json(mapper::heart_rate_to_observation(&reading).into()),
    ))
}

/// GET /fhir/Observation/blood_pressure/:patient_id — the patient's most
/// recent blood-pressure reading as an Observation
pub async fn get_blood_pressure(
    State(db): State<Arc<Database>>,
    Path(patient_id): Path<i32>,
) -> Result<(StatusCode, HeaderMap, Json<Resource>), FhirError> {
    let reading = db
        .latest_blood_pressure(patient_id)
        .await
        .map_err(|e| FhirError::internal(format!("Failed to retrieve blood pressure: {}", e)))?
        .ok_or_else(|| {
            FhirError::not_found(
                format!("No blood pressure reading for patient {}", patient_id),
                format!("Patient/{}", patient_id),
            )
        })?;

    Ok((
        StatusCode::OK,
        fhir_headers(),
        Json(mapper::blood_pressure_to_observation(&reading).into()),
    ))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
