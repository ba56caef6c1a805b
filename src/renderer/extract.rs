//! Top-level extract document.

use super::office::format_office;
use super::real_estate::format_real_estate;
use super::theme::format_themes;
use super::{child_path, insert_list, insert_str, Node, RenderContext};
use crate::error::Result;
use crate::localization::localized_text;
use crate::records::{Extract, TitledContent};
use crate::references::{ImageRef, LogoKind};
use serde_json::{json, Value};

/// Timestamp format of `CreationDate`.
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Assemble the complete extract document.
pub fn format_extract(extract: &Extract, ctx: &RenderContext<'_>) -> Result<Node> {
    let mode = ctx.mode;
    let mut node = Node::new();
    node.insert(
        "CreationDate".to_string(),
        Value::String(extract.creation_date.format(CREATION_DATE_FORMAT).to_string()),
    );
    node.insert("isReduced".to_string(), Value::Bool(mode.is_reduced()));
    node.insert(
        "ExtractIdentifier".to_string(),
        Value::String(extract.extract_identifier.clone()),
    );
    node.insert(
        "BaseData".to_string(),
        localized_text(&extract.base_data, mode, "BaseData")?,
    );
    node.insert(
        "PLRCadastreAuthority".to_string(),
        Value::Object(format_office(
            &extract.plr_cadastre_authority,
            ctx,
            "PLRCadastreAuthority",
        )?),
    );
    node.insert(
        "RealEstate".to_string(),
        Value::Object(format_real_estate(&extract.real_estate, ctx, "RealEstate")?),
    );
    node.insert(
        "ConcernedTheme".to_string(),
        Value::Array(format_themes(&extract.concerned_theme, ctx, "ConcernedTheme")?),
    );
    node.insert(
        "NotConcernedTheme".to_string(),
        Value::Array(format_themes(&extract.not_concerned_theme, ctx, "NotConcernedTheme")?),
    );
    node.insert(
        "ThemeWithoutData".to_string(),
        Value::Array(format_themes(&extract.theme_without_data, ctx, "ThemeWithoutData")?),
    );

    insert_logos(&mut node, extract, ctx);

    insert_str(&mut node, "ElectronicSignature", extract.electronic_signature.as_ref());
    insert_str(&mut node, "QRCode", extract.qr_code.as_ref());
    if let Some(general_information) = extract
        .general_information
        .as_ref()
        .filter(|text| !text.is_empty())
    {
        node.insert(
            "GeneralInformation".to_string(),
            localized_text(general_information, mode, "GeneralInformation")?,
        );
    }

    let exclusions = format_titled_contents(
        &extract.exclusions_of_liability,
        ctx,
        "ExclusionOfLiability",
    )?;
    insert_list(&mut node, "ExclusionOfLiability", exclusions);

    let glossary = format_titled_contents(&extract.glossaries, ctx, "Glossary")?;
    insert_list(&mut node, "Glossary", glossary);

    Ok(node)
}

fn insert_logos(node: &mut Node, extract: &Extract, ctx: &RenderContext<'_>) {
    if ctx.mode.include_images {
        let logos = [
            ("LogoPLRCadastre", &extract.logo_plr_cadastre),
            ("FederalLogo", &extract.federal_logo),
            ("CantonalLogo", &extract.cantonal_logo),
            ("MunicipalityLogo", &extract.municipality_logo),
        ];
        for (key, logo) in logos {
            node.insert(key.to_string(), Value::String(logo.encode()));
        }
    } else {
        let refs = [
            ("LogoPLRCadastreRef", ImageRef::Logo(LogoKind::PlrCadastre)),
            ("FederalLogoRef", ImageRef::Logo(LogoKind::Confederation)),
            ("CantonalLogoRef", ImageRef::Logo(LogoKind::Canton)),
            (
                "MunicipalityLogoRef",
                ImageRef::Municipality {
                    fosnr: extract.real_estate.fosnr,
                },
            ),
        ];
        for (key, image) in refs {
            node.insert(
                key.to_string(),
                Value::String(ctx.references.build_ref(&image)),
            );
        }
    }
}

fn format_titled_contents(
    entries: &[TitledContent],
    ctx: &RenderContext<'_>,
    path: &str,
) -> Result<Vec<Value>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry_path = format!("{}[{}]", path, index);
            let title = localized_text(&entry.title, ctx.mode, &child_path(&entry_path, "Title"))?;
            let content =
                localized_text(&entry.content, ctx.mode, &child_path(&entry_path, "Content"))?;
            Ok(json!({ "Title": title, "Content": content }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Flavour;
    use crate::records::{ImagePayload, LocalizedText, Map, NativeGeometry, RealEstate};
    use crate::renderer::test_support::{mode, office, with_context};
    use chrono::NaiveDate;

    fn extract() -> Extract {
        Extract {
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 31)
                .and_then(|d| d.and_hms_opt(8, 5, 0))
                .unwrap(),
            extract_identifier: "abc-123".to_string(),
            base_data: LocalizedText::from("Stand der amtlichen Vermessung"),
            plr_cadastre_authority: office("Amt für Geoinformation"),
            real_estate: RealEstate {
                real_estate_type: "RealEstate".to_string(),
                canton: "BL".to_string(),
                municipality: "Liestal".to_string(),
                fosnr: 2829,
                land_registry_area: 512,
                plan_for_land_register: Map::default(),
                limit: NativeGeometry::new("Polygon", serde_json::json!([])),
                number: None,
                identdn: None,
                egrid: None,
                subunit_of_land_register: None,
                metadata_of_geographical_base_data: None,
                public_law_restrictions: Vec::new(),
                references: Vec::new(),
            },
            concerned_theme: Vec::new(),
            not_concerned_theme: Vec::new(),
            theme_without_data: Vec::new(),
            logo_plr_cadastre: ImagePayload::new(b"oereb".to_vec()),
            federal_logo: ImagePayload::new(b"ch".to_vec()),
            cantonal_logo: ImagePayload::new(b"bl".to_vec()),
            municipality_logo: ImagePayload::new(b"liestal".to_vec()),
            electronic_signature: None,
            qr_code: None,
            general_information: None,
            exclusions_of_liability: Vec::new(),
            glossaries: Vec::new(),
            documents: Vec::new(),
        }
    }

    #[test]
    fn test_minimal_extract() {
        let mode = mode(Flavour::Full);
        let node = with_context(&mode, &[], |ctx| format_extract(&extract(), ctx)).unwrap();

        assert_eq!(node["CreationDate"], "2024-01-31T08:05:00");
        assert_eq!(node["isReduced"], Value::Bool(false));
        assert_eq!(node["ConcernedTheme"], json!([]));
        assert_eq!(node["MunicipalityLogoRef"], "municipality:2829");
        for key in [
            "ElectronicSignature",
            "QRCode",
            "GeneralInformation",
            "ExclusionOfLiability",
            "Glossary",
        ] {
            assert!(!node.contains_key(key), "{} should be absent", key);
        }
    }

    #[test]
    fn test_optional_keys() {
        let mut extract = extract();
        extract.electronic_signature = Some("signature".to_string());
        extract.qr_code = Some(String::new());
        extract.general_information = Some(LocalizedText::from("Allgemeine Informationen"));
        extract.exclusions_of_liability = vec![TitledContent::new("Haftung", "Ohne Gewähr")];

        let mode = mode(Flavour::Reduced);
        let node = with_context(&mode, &[], |ctx| format_extract(&extract, ctx)).unwrap();

        assert_eq!(node["isReduced"], Value::Bool(true));
        assert_eq!(node["ElectronicSignature"], "signature");
        assert!(!node.contains_key("QRCode"));
        assert_eq!(
            node["GeneralInformation"],
            json!([{"Language": "de", "Text": "Allgemeine Informationen"}])
        );
        assert_eq!(
            node["ExclusionOfLiability"],
            json!([{
                "Title": [{"Language": "de", "Text": "Haftung"}],
                "Content": [{"Language": "de", "Text": "Ohne Gewähr"}]
            }])
        );
    }

    #[test]
    fn test_inline_logos() {
        let mode = mode(Flavour::Full).with_images(true);
        let node = with_context(&mode, &[], |ctx| format_extract(&extract(), ctx)).unwrap();

        assert_eq!(node["FederalLogo"], "Y2g=");
        assert!(!node.contains_key("FederalLogoRef"));
        assert!(!node.contains_key("MunicipalityLogoRef"));
    }

    #[test]
    fn test_glossary_missing_translation_path() {
        let mut extract = extract();
        extract.glossaries = vec![
            TitledContent::new("ÖREB", "Eigentumsbeschränkung"),
            TitledContent::new(
                LocalizedText::multilingual([("it", "RDPP")]),
                "Restrizione",
            ),
        ];
        let mode = mode(Flavour::Full);
        let err = with_context(&mode, &[], |ctx| format_extract(&extract, ctx)).unwrap_err();
        assert!(err.to_string().contains("Glossary[1].Title"));
    }
}
