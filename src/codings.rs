//! Fixed vocabulary for the vital-sign observations this server emits.
//!
//! Every coding triple is constant; only quantity values come from the
//! stored readings. Adding a new observation kind means adding a variant
//! here and a mapping function in `mapper`.

use crate::models::{CodeableConcept, Coding};

pub const LOINC: &str = "http://loinc.org";
pub const UCUM: &str = "http://unitsofmeasure.org";
pub const OBSERVATION_CATEGORY: &str =
    "http://terminology.hl7.org/CodeSystem/observation-category";

pub const UNIT_BEATS_PER_MINUTE: (&str, &str) = ("beats/minute", "/min");
pub const UNIT_MMHG: (&str, &str) = ("mmHg", "mm[Hg]");

/// Observation kinds with a fixed LOINC coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalCode {
    HeartRate,
    BloodPressurePanel,
    Systolic,
    Diastolic,
}

impl VitalCode {
    const fn triple(self) -> (&'static str, &'static str, &'static str) {
        match self {
            VitalCode::HeartRate => (LOINC, "8867-4", "Heart rate"),
            VitalCode::BloodPressurePanel => (LOINC, "85354-9", "Blood pressure panel"),
            VitalCode::Systolic => (LOINC, "8480-6", "Systolic Blood Pressure"),
            VitalCode::Diastolic => (LOINC, "8462-4", "Diastolic Blood Pressure"),
        }
    }

    /// The coding wrapped in a single-coding CodeableConcept, the shape
    /// every Observation `code` and component `code` uses.
    pub fn concept(self) -> CodeableConcept {
        let (system, code, display) = self.triple();
        CodeableConcept {
            coding: vec![Coding {
                system: system.to_string(),
                code: code.to_string(),
                display: display.to_string(),
            }],
        }
    }
}

/// The vital-signs category concept shared by all observations here.
pub fn vital_signs_category() -> CodeableConcept {
    CodeableConcept {
        coding: vec![Coding {
            system: OBSERVATION_CATEGORY.to_string(),
            code: "vital-signs".to_string(),
            display: "Vital Signs".to_string(),
        }],
    }
}
