use crate::records::{ImagePayload, LegalDocument, LocalizedText, Office, RealEstate, Theme};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Root record of one extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extract {
    pub creation_date: NaiveDateTime,
    pub extract_identifier: String,
    /// Description of the base data and its currency
    pub base_data: LocalizedText,
    pub plr_cadastre_authority: Office,
    pub real_estate: RealEstate,
    #[serde(default)]
    pub concerned_theme: Vec<Theme>,
    #[serde(default)]
    pub not_concerned_theme: Vec<Theme>,
    #[serde(default)]
    pub theme_without_data: Vec<Theme>,
    pub logo_plr_cadastre: ImagePayload,
    pub federal_logo: ImagePayload,
    pub cantonal_logo: ImagePayload,
    pub municipality_logo: ImagePayload,
    #[serde(default)]
    pub electronic_signature: Option<String>,
    /// QR code image, already encoded
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub general_information: Option<LocalizedText>,
    #[serde(default)]
    pub exclusions_of_liability: Vec<TitledContent>,
    #[serde(default)]
    pub glossaries: Vec<TitledContent>,
    /// Every document and article referenced anywhere in the extract
    #[serde(default)]
    pub documents: Vec<LegalDocument>,
}

/// A title/content pair, used for liability exclusions and glossary entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledContent {
    pub title: LocalizedText,
    pub content: LocalizedText,
}

impl TitledContent {
    pub fn new(title: impl Into<LocalizedText>, content: impl Into<LocalizedText>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
