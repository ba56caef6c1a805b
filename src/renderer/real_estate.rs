use super::document::format_documents;
use super::geometry::format_native_geometry;
use super::plr::format_restrictions;
use super::view_service::format_map;
use super::{child_path, insert_list, insert_str, Node, RenderContext};
use crate::error::Result;
use crate::records::RealEstate;
use serde_json::Value;

/// Format the real estate with its restrictions and general references.
pub fn format_real_estate(real_estate: &RealEstate, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    node.insert(
        "Type".to_string(),
        Value::String(real_estate.real_estate_type.clone()),
    );
    node.insert("Canton".to_string(), Value::String(real_estate.canton.clone()));
    node.insert(
        "Municipality".to_string(),
        Value::String(real_estate.municipality.clone()),
    );
    node.insert("FosNr".to_string(), Value::from(real_estate.fosnr));
    node.insert(
        "LandRegistryArea".to_string(),
        Value::from(real_estate.land_registry_area),
    );
    node.insert(
        "PlanForLandRegister".to_string(),
        Value::Object(format_map(
            &real_estate.plan_for_land_register,
            ctx,
            &child_path(path, "PlanForLandRegister"),
        )?),
    );

    if ctx.mode.include_geometry {
        node.insert(
            "Limit".to_string(),
            format_native_geometry(&real_estate.limit, ctx.config),
        );
    }

    insert_str(&mut node, "Number", real_estate.number.as_ref());
    insert_str(&mut node, "IdentDN", real_estate.identdn.as_ref());
    insert_str(&mut node, "EGRID", real_estate.egrid.as_ref());
    insert_str(
        &mut node,
        "SubunitOfLandRegister",
        real_estate.subunit_of_land_register.as_ref(),
    );
    insert_str(
        &mut node,
        "MetadataOfGeographicalBaseData",
        real_estate.metadata_of_geographical_base_data.as_ref(),
    );

    let restrictions = format_restrictions(
        &real_estate.public_law_restrictions,
        ctx,
        &child_path(path, "RestrictionOnLandownership"),
    )?;
    insert_list(&mut node, "RestrictionOnLandownership", restrictions);

    let references = format_documents(
        &real_estate.references,
        ctx,
        &child_path(path, "Reference"),
    )?;
    insert_list(&mut node, "Reference", references);

    Ok(node)
}
