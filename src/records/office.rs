//! Responsible office records.

use crate::error::{Error, Result};
use crate::records::LocalizedText;
use serde::{Deserialize, Serialize};

/// An authority responsible for a restriction, document or geometry.
///
/// Deserialization runs the same name check as [`Office::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OfficeRecord")]
pub struct Office {
    /// Official name of the authority
    pub name: LocalizedText,
    /// Identifier in the federal business register
    #[serde(default)]
    pub uid: Option<String>,
    /// URL of the office's homepage
    #[serde(default)]
    pub office_at_web: Option<String>,
    /// Complementary address information
    #[serde(default)]
    pub line1: Option<String>,
    /// Complementary address information
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    /// House number
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub postal_code: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Unchecked wire form of an [`Office`].
#[derive(Deserialize)]
struct OfficeRecord {
    name: LocalizedText,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    office_at_web: Option<String>,
    #[serde(default)]
    line1: Option<String>,
    #[serde(default)]
    line2: Option<String>,
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    postal_code: Option<u32>,
    #[serde(default)]
    city: Option<String>,
}

impl TryFrom<OfficeRecord> for Office {
    type Error = Error;

    fn try_from(record: OfficeRecord) -> Result<Self> {
        let office = Office::new(record.name)?;
        Ok(Office {
            uid: record.uid,
            office_at_web: record.office_at_web,
            line1: record.line1,
            line2: record.line2,
            street: record.street,
            number: record.number,
            postal_code: record.postal_code,
            city: record.city,
            ..office
        })
    }
}

impl Office {
    /// Record field names, in schema order.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "name",
        "uid",
        "office_at_web",
        "line1",
        "line2",
        "street",
        "number",
        "postal_code",
        "city",
    ];

    /// Create an office with only its name set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the name is empty.
    pub fn new(name: impl Into<LocalizedText>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidRecord(
                "field \"name\" of an office must be defined".to_string(),
            ));
        }
        Ok(Self {
            name,
            uid: None,
            office_at_web: None,
            line1: None,
            line2: None,
            street: None,
            number: None,
            postal_code: None,
            city: None,
        })
    }

    /// Set the federal register identifier.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the homepage URL.
    pub fn with_office_at_web(mut self, url: impl Into<String>) -> Self {
        self.office_at_web = Some(url.into());
        self
    }

    /// Set street, house number, postal code and city in one go.
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        number: impl Into<String>,
        postal_code: u32,
        city: impl Into<String>,
    ) -> Self {
        self.street = Some(street.into());
        self.number = Some(number.into());
        self.postal_code = Some(postal_code);
        self.city = Some(city.into());
        self
    }
}
