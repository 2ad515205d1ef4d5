//! End-to-end shape tests: domain records through the mapper and bundle
//! assembler, asserted against the exact FHIR JSON the server emits.

use chrono::{TimeZone, Utc};
use serde_json::json;

use fhir_vitals::bundle;
use fhir_vitals::domain::{BloodPressureReading, HeartRateReading, Patient};
use fhir_vitals::mapper;
use fhir_vitals::models::Resource;

fn ada() -> Patient {
    Patient {
        id: 7,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        date_of_birth: Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap(),
    }
}

#[test]
fn patient_resource_json() {
    let resource: Resource = mapper::patient_to_fhir(&ada()).into();

    assert_eq!(
        serde_json::to_value(&resource).unwrap(),
        json!({
            "resourceType": "Patient",
            "id": "7",
            "name": [{"given": ["Ada"], "family": "Lovelace"}],
            "birthDate": "1815-12-10"
        })
    );
}

#[test]
fn heart_rate_observation_json() {
    let reading = HeartRateReading {
        id: 1,
        patient_id: 7,
        rate: 72,
        date: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
    };

    let resource: Resource = mapper::heart_rate_to_observation(&reading).into();

    assert_eq!(
        serde_json::to_value(&resource).unwrap(),
        json!({
            "resourceType": "Observation",
            "status": "final",
            "category": [{
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                    "code": "vital-signs",
                    "display": "Vital Signs"
                }]
            }],
            "code": {
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "8867-4",
                    "display": "Heart rate"
                }]
            },
            "subject": {"reference": "Patient/7"},
            "effectiveDateTime": "2024-01-01",
            "valueQuantity": {
                "value": 72,
                "unit": "beats/minute",
                "system": "http://unitsofmeasure.org",
                "code": "/min"
            }
        })
    );
}

#[test]
fn blood_pressure_observation_json() {
    let reading = BloodPressureReading {
        id: 3,
        patient_id: 7,
        systolic: 120.5,
        diastolic: 80.0,
        date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
    };

    let resource: Resource = mapper::blood_pressure_to_observation(&reading).into();

    assert_eq!(
        serde_json::to_value(&resource).unwrap(),
        json!({
            "resourceType": "Observation",
            "status": "final",
            "category": [{
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                    "code": "vital-signs",
                    "display": "Vital Signs"
                }]
            }],
            "code": {
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "85354-9",
                    "display": "Blood pressure panel"
                }]
            },
            "subject": {"reference": "Patient/7"},
            "effectiveDateTime": "2024-01-02",
            "component": [
                {
                    "code": {
                        "coding": [{
                            "system": "http://loinc.org",
                            "code": "8480-6",
                            "display": "Systolic Blood Pressure"
                        }]
                    },
                    "valueQuantity": {
                        "value": 120.5,
                        "unit": "mmHg",
                        "system": "http://unitsofmeasure.org",
                        "code": "mm[Hg]"
                    }
                },
                {
                    "code": {
                        "coding": [{
                            "system": "http://loinc.org",
                            "code": "8462-4",
                            "display": "Diastolic Blood Pressure"
                        }]
                    },
                    "valueQuantity": {
                        "value": 80.0,
                        "unit": "mmHg",
                        "system": "http://unitsofmeasure.org",
                        "code": "mm[Hg]"
                    }
                }
            ]
        })
    );
}

#[test]
fn patient_searchset_bundle_json() {
    let patients = vec![
        ada(),
        Patient {
            id: 8,
            first_name: "Charles".to_string(),
            last_name: "Babbage".to_string(),
            date_of_birth: Utc.with_ymd_and_hms(1791, 12, 26, 0, 0, 0).unwrap(),
        },
    ];

    let bundle = bundle::searchset(&patients, "Patient", |p| p.id, |p| {
        mapper::patient_to_fhir(p).into()
    });
    let json = serde_json::to_value(&Resource::from(bundle)).unwrap();

    assert_eq!(json["resourceType"], "Bundle");
    assert_eq!(json["type"], "searchset");
    assert_eq!(json["entry"].as_array().unwrap().len(), 2);
    assert_eq!(json["entry"][0]["fullUrl"], "Patient/7");
    assert_eq!(json["entry"][0]["resource"]["resourceType"], "Patient");
    assert_eq!(json["entry"][1]["fullUrl"], "Patient/8");
    assert_eq!(
        json["entry"][1]["resource"]["name"][0]["family"],
        "Babbage"
    );
}

#[test]
fn mixed_observation_bundle_json() {
    let heart_rates = vec![HeartRateReading {
        id: 21,
        patient_id: 1,
        rate: 58,
        date: Utc.with_ymd_and_hms(2024, 2, 1, 7, 15, 0).unwrap(),
    }];
    let pressures = vec![BloodPressureReading {
        id: 22,
        patient_id: 2,
        systolic: 135.0,
        diastolic: 88.0,
        date: Utc.with_ymd_and_hms(2024, 2, 1, 7, 45, 0).unwrap(),
    }];

    let mut entries = bundle::entries(&heart_rates, "Observation", |r| r.id, |r| {
        mapper::heart_rate_to_observation(r).into()
    });
    entries.extend(bundle::entries(&pressures, "Observation", |r| r.id, |r| {
        mapper::blood_pressure_to_observation(r).into()
    }));
    let bundle = fhir_vitals::models::BundleResource::searchset(entries);
    let json = serde_json::to_value(&Resource::from(bundle)).unwrap();

    assert_eq!(json["entry"][0]["fullUrl"], "Observation/21");
    assert!(json["entry"][0]["resource"]["valueQuantity"].is_object());
    assert_eq!(json["entry"][1]["fullUrl"], "Observation/22");
    assert!(json["entry"][1]["resource"]["component"].is_array());
}
