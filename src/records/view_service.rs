//! View service (map) and legend records.

use crate::records::{ImagePayload, LocalizedText, Theme};
use serde::{Deserialize, Serialize};

/// A map as delivered by a view service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Map {
    /// Pre-rendered map image
    #[serde(default)]
    pub image: Option<ImagePayload>,
    /// WMS GetMap request URL
    #[serde(default)]
    pub link_wms: Option<String>,
    /// URL of the legend graphic
    #[serde(default)]
    pub legend_web: Option<String>,
    /// Legend entries of other restrictions visible on the map
    #[serde(default)]
    pub legends: Vec<LegendEntry>,
}

impl Map {
    pub fn with_link_wms(mut self, link: impl Into<String>) -> Self {
        self.link_wms = Some(link.into());
        self
    }

    pub fn with_legend(mut self, entry: LegendEntry) -> Self {
        self.legends.push(entry);
        self
    }
}

/// One entry of a map legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub symbol: ImagePayload,
    pub legend_text: LocalizedText,
    pub type_code: String,
    pub type_code_list: String,
    pub theme: Theme,
    #[serde(default)]
    pub sub_theme: Option<String>,
    #[serde(default)]
    pub additional_theme: Option<String>,
}
