//! Map (view service) and legend entry formatting.

use super::theme::format_theme;
use super::{child_path, insert_list, insert_str, Node, RenderContext};
use crate::error::Result;
use crate::localization::localized_text;
use crate::records::{LegendEntry, Map};
use crate::references::ImageRef;
use serde_json::Value;

/// Format a map. Every key is optional.
///
/// `Image` is only emitted when images are requested and the map has one.
pub fn format_map(map: &Map, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    if ctx.mode.include_images {
        if let Some(image) = map.image.as_ref().filter(|image| !image.is_empty()) {
            node.insert("Image".to_string(), Value::String(image.encode()));
        }
    }
    insert_str(&mut node, "ReferenceWMS", map.link_wms.as_ref());
    insert_str(&mut node, "LegendAtWeb", map.legend_web.as_ref());

    let legend_path = child_path(path, "OtherLegend");
    let legends = map
        .legends
        .iter()
        .map(|entry| format_legend_entry(entry, ctx, &legend_path).map(Value::Object))
        .collect::<Result<Vec<_>>>()?;
    insert_list(&mut node, "OtherLegend", legends);
    Ok(node)
}

/// Format a legend entry.
///
/// Carries either the inline `Symbol` or a `SymbolRef` descriptor,
/// depending on the image mode.
pub fn format_legend_entry(entry: &LegendEntry, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    node.insert(
        "LegendText".to_string(),
        localized_text(&entry.legend_text, ctx.mode, &child_path(path, "LegendText"))?,
    );
    node.insert("TypeCode".to_string(), Value::String(entry.type_code.clone()));
    node.insert(
        "TypeCodelist".to_string(),
        Value::String(entry.type_code_list.clone()),
    );
    node.insert(
        "Theme".to_string(),
        Value::Object(format_theme(&entry.theme, ctx, &child_path(path, "Theme"))?),
    );

    if ctx.mode.include_images {
        node.insert("Symbol".to_string(), Value::String(entry.symbol.encode()));
    } else {
        let reference = ctx.references.build_ref(&ImageRef::Symbol {
            theme_code: &entry.theme.code,
            type_code: &entry.type_code,
        });
        node.insert("SymbolRef".to_string(), Value::String(reference));
    }

    insert_str(&mut node, "SubTheme", entry.sub_theme.as_ref());
    insert_str(&mut node, "OtherTheme", entry.additional_theme.as_ref());
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Flavour;
    use crate::records::ImagePayload;
    use crate::renderer::test_support::{legend_entry, mode, with_context};

    #[test]
    fn test_empty_map() {
        let mode = mode(Flavour::Full).with_images(true);
        let node = with_context(&mode, &[], |ctx| format_map(&Map::default(), ctx, "Map")).unwrap();
        assert!(node.is_empty());
    }

    #[test]
    fn test_map_image_only_in_image_mode() {
        let map = Map {
            image: Some(ImagePayload::new(b"png".to_vec())),
            ..Default::default()
        }
        .with_link_wms("https://wms.example.ch?REQUEST=GetMap");

        let with_images = mode(Flavour::Full).with_images(true);
        let node = with_context(&with_images, &[], |ctx| format_map(&map, ctx, "Map")).unwrap();
        assert_eq!(node["Image"], "cG5n");
        assert_eq!(node["ReferenceWMS"], "https://wms.example.ch?REQUEST=GetMap");

        let without_images = mode(Flavour::Full);
        let node = with_context(&without_images, &[], |ctx| format_map(&map, ctx, "Map")).unwrap();
        assert!(!node.contains_key("Image"));
        assert!(node.contains_key("ReferenceWMS"));
    }

    #[test]
    fn test_map_other_legend() {
        let map = Map::default().with_legend(legend_entry());
        let mode = mode(Flavour::Full);
        let node = with_context(&mode, &[], |ctx| format_map(&map, ctx, "Map")).unwrap();
        let legends = node["OtherLegend"].as_array().unwrap();
        assert_eq!(legends.len(), 1);
        assert_eq!(legends[0]["TypeCode"], "W2");
    }

    #[test]
    fn test_legend_entry_symbol_ref() {
        let mode = mode(Flavour::Full);
        let node = with_context(&mode, &[], |ctx| {
            format_legend_entry(&legend_entry(), ctx, "Legend")
        })
        .unwrap();
        assert_eq!(
            node.keys().collect::<Vec<_>>(),
            vec!["LegendText", "TypeCode", "TypeCodelist", "Theme", "SymbolRef"]
        );
        assert_eq!(node["SymbolRef"], "symbol:LandUsePlans:W2");
    }

    #[test]
    fn test_legend_entry_inline_symbol_and_sub_themes() {
        let mut entry = legend_entry();
        entry.sub_theme = Some("Zonen".to_string());
        entry.additional_theme = Some("ch.SO.Zonen".to_string());
        let mode = mode(Flavour::Full).with_images(true);
        let node = with_context(&mode, &[], |ctx| format_legend_entry(&entry, ctx, "Legend")).unwrap();
        assert_eq!(node["Symbol"], "c3lt");
        assert!(!node.contains_key("SymbolRef"));
        assert_eq!(node["SubTheme"], "Zonen");
        assert_eq!(node["OtherTheme"], "ch.SO.Zonen");
    }
}
