use serde::Serialize;
use serde_json::Value;

/// The closed set of FHIR resources this server produces. Serializes with
/// the variant name as `resourceType`, per the FHIR JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Patient(PatientResource),
    Observation(ObservationResource),
    Bundle(BundleResource),
}

impl From<PatientResource> for Resource {
    fn from(patient: PatientResource) -> Self {
        Resource::Patient(patient)
    }
}

impl From<ObservationResource> for Resource {
    fn from(observation: ObservationResource) -> Self {
        Resource::Observation(observation)
    }
}

impl From<BundleResource> for Resource {
    fn from(bundle: BundleResource) -> Self {
        Resource::Bundle(bundle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientResource {
    pub id: String,
    pub name: Vec<HumanName>,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanName {
    pub given: Vec<String>,
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationResource {
    pub status: String,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub subject: Reference,
    #[serde(rename = "effectiveDateTime")]
    pub effective_date_time: String,
    #[serde(flatten)]
    pub value: ObservationValue,
}

/// An Observation carries either a single quantity or a list of named
/// components, never both. The enum keys the JSON field accordingly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObservationValue {
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "component")]
    Components(Vec<ObservationComponent>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    #[serde(rename = "valueQuantity")]
    pub value_quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub value: Value,
    pub unit: String,
    pub system: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleResource {
    #[serde(rename = "type")]
    pub bundle_type: String,
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: String,
    pub resource: Resource,
}

/// FHIR OperationOutcome for error responses
#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcome {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub issue: Vec<OperationOutcomeIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcomeIssue {
    pub severity: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,
}

impl OperationOutcome {
    /// Create a new error outcome
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            resource_type: "OperationOutcome".to_string(),
            issue: vec![OperationOutcomeIssue {
                severity: "error".to_string(),
                code: code.into(),
                diagnostics: Some(message.into()),
                location: None,
            }],
        }
    }

    /// Create outcome with location information
    pub fn error_with_location(
        code: impl Into<String>,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: "OperationOutcome".to_string(),
            issue: vec![OperationOutcomeIssue {
                severity: "error".to_string(),
                code: code.into(),
                diagnostics: Some(message.into()),
                location: Some(vec![location.into()]),
            }],
        }
    }
}
