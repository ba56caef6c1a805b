//! Legal document formatting.
//!
//! Documents are formatted recursively: a document embeds its articles and
//! the documents it references. The recursion runs over the extract's
//! document graph and carries a [`ReferenceTrail`], so a document that
//! (directly or indirectly) references itself aborts the render with
//! [`Error::CircularReference`](crate::error::Error::CircularReference)
//! instead of recursing forever. A document shared by several parents is
//! simply formatted once per occurrence.

use super::office::format_office;
use super::{child_path, insert_list, insert_str, Node, ReferenceTrail, RenderContext};
use crate::error::Result;
use crate::localization::localized_text;
use crate::records::{Article, Document, DocumentId, LegalDocument};
use serde_json::Value;

/// Format the documents behind `ids`, in order, each with a fresh trail.
pub fn format_documents(ids: &[DocumentId], ctx: &RenderContext<'_>, path: &str) -> Result<Vec<Value>> {
    ids.iter()
        .map(|id| {
            let mut trail = ReferenceTrail::new();
            format_document_ref(id, ctx, &mut trail, path).map(Value::Object)
        })
        .collect()
}

/// Resolve `id` and format the record behind it.
pub fn format_document_ref(
    id: &DocumentId,
    ctx: &RenderContext<'_>,
    trail: &mut ReferenceTrail,
    path: &str,
) -> Result<Node> {
    let document = ctx.documents.get(id)?;
    format_document(document, ctx, trail, path)
}

/// Format a document or article.
pub fn format_document(
    document: &LegalDocument,
    ctx: &RenderContext<'_>,
    trail: &mut ReferenceTrail,
    path: &str,
) -> Result<Node> {
    trail.enter(document.id())?;
    log::debug!("Formatting document '{}' (depth: {})", document.id(), trail.depth());

    let node = match document {
        LegalDocument::Document(doc) => format_legal_document(doc, ctx, trail, path),
        LegalDocument::Article(article) => format_article(article, ctx, path),
    };

    trail.leave();
    node
}

fn format_legal_document(
    doc: &Document,
    ctx: &RenderContext<'_>,
    trail: &mut ReferenceTrail,
    path: &str,
) -> Result<Node> {
    let mode = ctx.mode;
    let mut node = Node::new();
    node.insert("Lawstatus".to_string(), Value::String(doc.legal_state.clone()));
    node.insert(
        "TextAtWeb".to_string(),
        localized_text(&doc.text_at_web, mode, &child_path(path, "TextAtWeb"))?,
    );
    node.insert(
        "Title".to_string(),
        localized_text(&doc.title, mode, &child_path(path, "Title"))?,
    );
    node.insert(
        "ResponsibleOffice".to_string(),
        Value::Object(format_office(
            &doc.responsible_office,
            ctx,
            &child_path(path, "ResponsibleOffice"),
        )?),
    );

    if let Some(official_title) = doc.official_title.as_ref().filter(|t| !t.is_empty()) {
        node.insert(
            "OfficialTitle".to_string(),
            localized_text(official_title, mode, &child_path(path, "OfficialTitle"))?,
        );
    }
    // Key spelling follows the federal schema.
    if let Some(abbreviation) = doc.abbreviation.as_ref().filter(|t| !t.is_empty()) {
        node.insert(
            "Abbrevation".to_string(),
            localized_text(abbreviation, mode, &child_path(path, "Abbrevation"))?,
        );
    }
    insert_str(&mut node, "OfficialNumber", doc.official_number.as_ref());
    insert_str(&mut node, "Canton", doc.canton.as_ref());
    insert_str(&mut node, "Municipality", doc.municipality.as_ref());

    let article_numbers = doc
        .article_numbers
        .iter()
        .map(|number| Value::String(number.clone()))
        .collect();
    insert_list(&mut node, "ArticleNumber", article_numbers);

    let article_path = child_path(path, "Article");
    let articles = doc
        .articles
        .iter()
        .map(|id| format_document_ref(id, ctx, trail, &article_path).map(Value::Object))
        .collect::<Result<Vec<_>>>()?;
    insert_list(&mut node, "Article", articles);

    let reference_path = child_path(path, "Reference");
    let references = doc
        .references
        .iter()
        .map(|id| format_document_ref(id, ctx, trail, &reference_path).map(Value::Object))
        .collect::<Result<Vec<_>>>()?;
    insert_list(&mut node, "Reference", references);

    Ok(node)
}

fn format_article(article: &Article, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    node.insert("Lawstatus".to_string(), Value::String(article.legal_state.clone()));
    node.insert("Number".to_string(), Value::String(article.number.clone()));
    if let Some(text_at_web) = article.text_at_web.as_ref().filter(|t| !t.is_empty()) {
        node.insert(
            "TextAtWeb".to_string(),
            localized_text(text_at_web, ctx.mode, &child_path(path, "TextAtWeb"))?,
        );
    }
    if let Some(text) = article.text.as_ref().filter(|t| !t.is_empty()) {
        node.insert(
            "Text".to_string(),
            localized_text(text, ctx.mode, &child_path(path, "Text"))?,
        );
    }
    Ok(node)
}
