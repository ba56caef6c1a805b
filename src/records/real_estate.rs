use crate::records::{DocumentId, Map, NativeGeometry, Restriction};
use serde::{Deserialize, Serialize};

/// The parcel an extract is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealEstate {
    /// Real estate type, e.g. `RealEstate` or `Distinct_and_permanent_rights.BuildingRight`
    #[serde(rename = "type")]
    pub real_estate_type: String,
    /// Canton abbreviation
    pub canton: String,
    pub municipality: String,
    /// Federal municipality number
    pub fosnr: u32,
    /// Area according to the land register, in square metres
    pub land_registry_area: u64,
    pub plan_for_land_register: Map,
    /// Parcel boundary
    pub limit: NativeGeometry,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub identdn: Option<String>,
    #[serde(default)]
    pub egrid: Option<String>,
    #[serde(default)]
    pub subunit_of_land_register: Option<String>,
    #[serde(default)]
    pub metadata_of_geographical_base_data: Option<String>,
    #[serde(default)]
    pub public_law_restrictions: Vec<Restriction>,
    /// General documents referenced by the extract
    #[serde(default)]
    pub references: Vec<DocumentId>,
}
