use crate::records::{DocumentId, Geometry, ImagePayload, LocalizedText, Map, Office, Theme};
use serde::{Deserialize, Serialize};

/// A public-law restriction on landownership affecting a real estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    /// Description of the restriction
    pub content: LocalizedText,
    pub theme: Theme,
    pub legal_state: String,
    pub responsible_office: Office,
    pub view_service: Map,
    pub symbol: ImagePayload,
    /// Affected area in square metres
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub subtopic: Option<String>,
    #[serde(default)]
    pub additional_topic: Option<String>,
    #[serde(default)]
    pub type_code: Option<String>,
    #[serde(default)]
    pub type_code_list: Option<String>,
    #[serde(default)]
    pub part_in_percent: Option<f64>,
    #[serde(default)]
    pub geometries: Vec<Geometry>,
    /// Legal provisions and other documents forming the legal basis
    #[serde(default)]
    pub documents: Vec<DocumentId>,
}
