//! Pure transformations from stored rows to FHIR resources.
//!
//! Each function reads one domain record and builds one resource. No I/O,
//! no clock, no randomness: identical input fields yield identical output.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::codings::{
    vital_signs_category, VitalCode, UCUM, UNIT_BEATS_PER_MINUTE, UNIT_MMHG,
};
use crate::domain::{BloodPressureReading, HeartRateReading, Patient};
use crate::models::{
    HumanName, ObservationComponent, ObservationResource, ObservationValue, PatientResource,
    Quantity, Reference,
};

const STATUS_FINAL: &str = "final";

/// Date-only rendering of a stored timestamp; any time-of-day component
/// on the column is truncated.
fn effective_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.date_naive().format("%Y-%m-%d").to_string()
}

fn subject_of(patient_id: i32) -> Reference {
    Reference {
        reference: format!("Patient/{}", patient_id),
    }
}

/// Map a patient row to a FHIR Patient resource.
pub fn patient_to_fhir(patient: &Patient) -> PatientResource {
    PatientResource {
        id: patient.id.to_string(),
        name: vec![HumanName {
            given: vec![patient.first_name.clone()],
            family: patient.last_name.clone(),
        }],
        birth_date: effective_date(&patient.date_of_birth),
    }
}

/// Map a heart-rate row to a scalar-valued vital-signs Observation.
pub fn heart_rate_to_observation(reading: &HeartRateReading) -> ObservationResource {
    let (unit, unit_code) = UNIT_BEATS_PER_MINUTE;
    ObservationResource {
        status: STATUS_FINAL.to_string(),
        category: vec![vital_signs_category()],
        code: VitalCode::HeartRate.concept(),
        subject: subject_of(reading.patient_id),
        effective_date_time: effective_date(&reading.date),
        value: ObservationValue::Quantity(Quantity {
            value: json!(reading.rate),
            unit: unit.to_string(),
            system: UCUM.to_string(),
            code: unit_code.to_string(),
        }),
    }
}

/// Map a blood-pressure row to a component-valued vital-signs Observation:
/// a panel code with systolic and diastolic components, in that order.
pub fn blood_pressure_to_observation(reading: &BloodPressureReading) -> ObservationResource {
    ObservationResource {
        status: STATUS_FINAL.to_string(),
        category: vec![vital_signs_category()],
        code: VitalCode::BloodPressurePanel.concept(),
        subject: subject_of(reading.patient_id),
        effective_date_time: effective_date(&reading.date),
        value: ObservationValue::Components(vec![
            pressure_component(VitalCode::Systolic, reading.systolic),
            pressure_component(VitalCode::Diastolic, reading.diastolic),
        ]),
    }
}

fn pressure_component(code: VitalCode, mmhg: f64) -> ObservationComponent {
    let (unit, unit_code) = UNIT_MMHG;
    ObservationComponent {
        code: code.concept(),
        value_quantity: Quantity {
            value: json!(mmhg),
            unit: unit.to_string(),
            system: UCUM.to_string(),
            code: unit_code.to_string(),
        },
    }
}
