use super::office::format_office;
use super::{child_path, insert_str, Node, RenderContext};
use crate::classification::classify;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::records::{Geometry, NativeGeometry};
use serde_json::{json, Value};

/// Coordinates of a native geometry with the configured CRS attached.
pub fn format_native_geometry(geom: &NativeGeometry, config: &RenderConfig) -> Value {
    json!({
        "coordinates": geom.coordinates,
        "crs": config.crs(),
    })
}

/// Format one restriction geometry.
///
/// The geometry is stored under `Point`, `Line` or `Surface` depending on
/// the configured category of its native type.
pub fn format_geometry(geometry: &Geometry, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let category = match classify(&geometry.geom.geom_type, ctx.config.geometry_categories()) {
        Ok(category) => category,
        Err(e) => {
            log::error!("Cannot format geometry at {}: {}", path, e);
            return Err(e);
        },
    };
    log::debug!(
        "Formatting {} geometry as {}",
        geometry.geom.geom_type,
        category.key()
    );

    let mut node = Node::new();
    node.insert(
        category.key().to_string(),
        format_native_geometry(&geometry.geom, ctx.config),
    );
    node.insert("Lawstatus".to_string(), Value::String(geometry.legal_state.clone()));
    node.insert(
        "ResponsibleOffice".to_string(),
        Value::Object(format_office(
            &geometry.office,
            ctx,
            &child_path(path, "ResponsibleOffice"),
        )?),
    );
    insert_str(&mut node, "MetadataOfGeographicalBaseData", geometry.geo_metadata.as_ref());
    Ok(node)
}
