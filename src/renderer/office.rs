use super::{child_path, insert_str, Node, RenderContext};
use crate::error::Result;
use crate::localization::localized_text;
use crate::records::Office;
use serde_json::Value;

/// Format a responsible office.
///
/// Only `Name` is mandatory; every other key is present only if the record
/// has a non-empty value for it.
pub fn format_office(office: &Office, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    node.insert(
        "Name".to_string(),
        localized_text(&office.name, ctx.mode, &child_path(path, "Name"))?,
    );
    insert_str(&mut node, "OfficeAtWeb", office.office_at_web.as_ref());
    insert_str(&mut node, "UID", office.uid.as_ref());
    insert_str(&mut node, "Line1", office.line1.as_ref());
    insert_str(&mut node, "Line2", office.line2.as_ref());
    insert_str(&mut node, "Street", office.street.as_ref());
    insert_str(&mut node, "Number", office.number.as_ref());
    if let Some(postal_code) = office.postal_code {
        node.insert("PostalCode".to_string(), Value::from(postal_code));
    }
    insert_str(&mut node, "City", office.city.as_ref());
    Ok(node)
}
