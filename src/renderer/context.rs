//! Per-render state shared by all formatters.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::mode::RenderMode;
use crate::records::{DocumentId, LegalDocument};
use crate::references::ReferenceBuilder;
use std::collections::HashMap;

/// Maximum nesting of document references and articles.
pub const MAX_REFERENCE_DEPTH: u32 = 64;

/// Everything a formatter may read during one render.
///
/// Immutable and borrowed from the caller; a context lives only as long as
/// one [`ExtractRenderer::render`](super::ExtractRenderer::render) call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a RenderConfig,
    pub mode: &'a RenderMode,
    pub references: &'a dyn ReferenceBuilder,
    pub documents: &'a DocumentIndex<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a RenderConfig,
        mode: &'a RenderMode,
        references: &'a dyn ReferenceBuilder,
        documents: &'a DocumentIndex<'a>,
    ) -> Self {
        Self {
            config,
            mode,
            references,
            documents,
        }
    }
}

/// Lookup table from document id to record.
#[derive(Debug, Default)]
pub struct DocumentIndex<'a> {
    documents: HashMap<&'a DocumentId, &'a LegalDocument>,
}

impl<'a> DocumentIndex<'a> {
    /// Index a list of documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateDocument`] if two records share an id.
    pub fn build(documents: &'a [LegalDocument]) -> Result<Self> {
        let mut index = HashMap::with_capacity(documents.len());
        for document in documents {
            if index.insert(document.id(), document).is_some() {
                return Err(Error::DuplicateDocument(document.id().clone()));
            }
        }
        Ok(Self { documents: index })
    }

    /// Look up a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDocument`] for ids not in the index.
    pub fn get(&self, id: &DocumentId) -> Result<&'a LegalDocument> {
        self.documents
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownDocument(id.clone()))
    }
}

/// The chain of documents currently being formatted, root first.
///
/// Guards the recursive document formatter against reference cycles. A
/// document may be visited any number of times from different parents, but
/// never while it is one of its own ancestors.
#[derive(Debug, Default)]
pub struct ReferenceTrail {
    stack: Vec<DocumentId>,
}

impl ReferenceTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `id` onto the trail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CircularReference`] if `id` is already on the trail
    /// and [`Error::RecursionLimitExceeded`] if the trail is full.
    pub fn enter(&mut self, id: &DocumentId) -> Result<()> {
        if self.stack.len() as u32 >= MAX_REFERENCE_DEPTH {
            log::error!(
                "Reference depth limit exceeded ({}) while formatting document '{}'",
                MAX_REFERENCE_DEPTH,
                id
            );
            return Err(Error::RecursionLimitExceeded(MAX_REFERENCE_DEPTH));
        }
        if self.stack.contains(id) {
            log::error!(
                "Circular reference detected for document '{}' (depth: {})",
                id,
                self.stack.len()
            );
            return Err(Error::CircularReference(id.clone()));
        }
        self.stack.push(id.clone());
        Ok(())
    }

    /// Pop the innermost document.
    pub fn leave(&mut self) {
        self.stack.pop();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
