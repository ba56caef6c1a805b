//! Public-law restriction formatting.

use super::document::format_documents;
use super::geometry::format_geometry;
use super::office::format_office;
use super::theme::format_theme;
use super::view_service::format_map;
use super::{child_path, insert_list, insert_str, Node, RenderContext};
use crate::error::{Error, Result};
use crate::localization::localized_text;
use crate::records::Restriction;
use crate::references::ImageRef;
use serde_json::Value;

/// Format the restrictions of a real estate, in input order.
///
/// # Errors
///
/// A restriction without documents is only allowed in a reduced extract;
/// in every other flavour it fails the whole list with
/// [`Error::MissingLegalBasis`].
pub fn format_restrictions(
    restrictions: &[Restriction],
    ctx: &RenderContext<'_>,
    path: &str,
) -> Result<Vec<Value>> {
    restrictions
        .iter()
        .enumerate()
        .map(|(index, plr)| format_restriction(index, plr, ctx, path).map(Value::Object))
        .collect()
}

fn format_restriction(
    index: usize,
    plr: &Restriction,
    ctx: &RenderContext<'_>,
    path: &str,
) -> Result<Node> {
    let mode = ctx.mode;
    if mode.requires_legal_basis() && plr.documents.is_empty() {
        log::error!(
            "Restriction #{} of theme '{}' has no legal provision ({} extract)",
            index,
            plr.theme.code,
            mode.flavour
        );
        return Err(Error::MissingLegalBasis {
            index,
            theme_code: plr.theme.code.clone(),
        });
    }
    log::debug!("Formatting restriction #{} of theme '{}'", index, plr.theme.code);

    let path = format!("{}[{}]", path, index);
    let mut node = Node::new();
    node.insert(
        "Information".to_string(),
        localized_text(&plr.content, mode, &child_path(&path, "Information"))?,
    );
    node.insert(
        "Theme".to_string(),
        Value::Object(format_theme(&plr.theme, ctx, &child_path(&path, "Theme"))?),
    );
    node.insert("Lawstatus".to_string(), Value::String(plr.legal_state.clone()));
    node.insert("Area".to_string(), plr.area.map(Value::from).unwrap_or(Value::Null));
    node.insert(
        "ResponsibleOffice".to_string(),
        Value::Object(format_office(
            &plr.responsible_office,
            ctx,
            &child_path(&path, "ResponsibleOffice"),
        )?),
    );
    node.insert(
        "Map".to_string(),
        Value::Object(format_map(&plr.view_service, ctx, &child_path(&path, "Map"))?),
    );

    let type_code = plr.type_code.as_ref().filter(|code| !code.is_empty());
    if mode.include_images {
        node.insert("Symbol".to_string(), Value::String(plr.symbol.encode()));
    } else if let Some(type_code) = type_code {
        // A symbol can only be referenced through its type code.
        let reference = ctx.references.build_ref(&ImageRef::Symbol {
            theme_code: &plr.theme.code,
            type_code,
        });
        node.insert("SymbolRef".to_string(), Value::String(reference));
    }

    insert_str(&mut node, "SubTheme", plr.subtopic.as_ref());
    insert_str(&mut node, "OtherTheme", plr.additional_topic.as_ref());
    insert_str(&mut node, "TypeCode", type_code);
    insert_str(&mut node, "TypeCodelist", plr.type_code_list.as_ref());
    if let Some(part_in_percent) = plr.part_in_percent {
        node.insert("PartInPercent".to_string(), Value::from(part_in_percent));
    }

    if mode.include_geometry {
        let geometry_path = child_path(&path, "Geometry");
        let geometries = plr
            .geometries
            .iter()
            .map(|geometry| format_geometry(geometry, ctx, &geometry_path).map(Value::Object))
            .collect::<Result<Vec<_>>>()?;
        insert_list(&mut node, "Geometry", geometries);
    }

    let documents = format_documents(&plr.documents, ctx, &child_path(&path, "LegalProvisions"))?;
    insert_list(&mut node, "LegalProvisions", documents);

    Ok(node)
}
